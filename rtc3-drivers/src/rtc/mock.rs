//! Register-file mock of the RTC for host tests

use heapless::Vec;
use rtc3_hal::{I2cBus, InputPin};

/// One bus transaction as seen by the mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Plain write: register pointer and the first data byte, if any
    Write {
        address: u8,
        register: u8,
        value: Option<u8>,
    },
    /// Pointer write followed by a repeated-start read
    WriteRead { address: u8, register: u8, len: usize },
}

/// Error returned when a failure is injected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockNack;

/// Fake I2C bus backed by a 256-byte register file
///
/// Writes store bytes starting at the register pointer with auto-increment,
/// like the real chip.
pub struct MockBus {
    pub regs: [u8; 256],
    pub log: Vec<Transaction, 128>,
    /// Fail every transaction once this many have succeeded
    pub fail_after: Option<usize>,
    pointer: u8,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            regs: [0; 256],
            log: Vec::new(),
            fail_after: None,
            pointer: 0,
        }
    }

    /// Mock with a preset register value
    pub fn with_register(register: u8, value: u8) -> Self {
        let mut bus = Self::new();
        bus.regs[register as usize] = value;
        bus
    }

    /// Registers written, in order
    pub fn written_registers(&self) -> Vec<u8, 128> {
        self.log
            .iter()
            .filter_map(|t| match t {
                Transaction::Write {
                    register,
                    value: Some(_),
                    ..
                } => Some(*register),
                _ => None,
            })
            .collect()
    }

    fn check_fail(&self) -> Result<(), MockNack> {
        match self.fail_after {
            Some(n) if self.log.len() >= n => Err(MockNack),
            _ => Ok(()),
        }
    }

    fn record(&mut self, t: Transaction) {
        let _ = self.log.push(t);
    }
}

impl I2cBus for MockBus {
    type Error = MockNack;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.check_fail()?;
        let Some((&register, payload)) = data.split_first() else {
            return Ok(());
        };
        self.record(Transaction::Write {
            address,
            register,
            value: payload.first().copied(),
        });
        self.pointer = register;
        for byte in payload {
            self.regs[self.pointer as usize] = *byte;
            self.pointer = self.pointer.wrapping_add(1);
        }
        Ok(())
    }

    fn read(&mut self, _address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.check_fail()?;
        for byte in buf.iter_mut() {
            *byte = self.regs[self.pointer as usize];
            self.pointer = self.pointer.wrapping_add(1);
        }
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.check_fail()?;
        let register = write_data.first().copied().unwrap_or(self.pointer);
        self.record(Transaction::WriteRead {
            address,
            register,
            len: read_buf.len(),
        });
        self.pointer = register;
        for byte in read_buf.iter_mut() {
            *byte = self.regs[self.pointer as usize];
            self.pointer = self.pointer.wrapping_add(1);
        }
        Ok(())
    }
}

/// Mock interrupt line
pub struct MockPin {
    pub high: bool,
}

impl InputPin for MockPin {
    fn is_high(&self) -> bool {
        self.high
    }
}
