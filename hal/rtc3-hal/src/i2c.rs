//! I2C bus abstractions
//!
//! Provides the I2C master trait the RTC driver talks through, and an
//! adapter for any `embedded-hal` 1.0 I2C implementation.
//!
//! Every call is one complete bus transaction: START is issued implicitly,
//! `write` ends with STOP, and `write_read` issues a repeated START between
//! the write and read phases before the final STOP.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c, NoAcknowledgeSource};

/// I2C bus master
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// This is commonly used to write a register address then read data.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `write_data` - Bytes to write (typically register address)
    /// * `read_buf` - Buffer to read into
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::read(self, address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        T::write_read(self, address, write_data, read_buf)
    }
}

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error (misplaced START/STOP)
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received on the address byte
    AddressNack,
    /// NACK received on a data byte
    DataNack,
    /// Timeout
    Timeout,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<ErrorKind> for I2cBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => I2cBusError::Bus,
            ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data) => I2cBusError::DataNack,
            ErrorKind::NoAcknowledge(_) => I2cBusError::AddressNack,
            ErrorKind::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

/// Adapter from an `embedded-hal` 1.0 I2C peripheral to [`I2cBus`]
///
/// Chip HALs (embassy, esp-hal, rp2040-hal, ...) all implement
/// [`embedded_hal::i2c::I2c`], so wrapping one of them is enough to hand it
/// to the RTC driver.
pub struct EhI2c<T> {
    inner: T,
}

impl<T> EhI2c<T> {
    /// Wrap an `embedded-hal` I2C peripheral
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Give back the wrapped peripheral
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: I2c> I2cBus for EhI2c<T> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        I2c::write(&mut self.inner, address, data).map_err(|e| I2cBusError::from(e.kind()))
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        I2c::read(&mut self.inner, address, buf).map_err(|e| I2cBusError::from(e.kind()))
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        I2c::write_read(&mut self.inner, address, write_data, read_buf)
            .map_err(|e| I2cBusError::from(e.kind()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorType, Operation};

    /// Fake `embedded-hal` bus that echoes the first written byte back
    struct FakeBus {
        last_address: u8,
        last_write: [u8; 2],
        fail: Option<ErrorKind>,
    }

    impl FakeBus {
        fn new() -> Self {
            Self {
                last_address: 0,
                last_write: [0; 2],
                fail: None,
            }
        }
    }

    impl ErrorType for FakeBus {
        type Error = ErrorKind;
    }

    impl I2c for FakeBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if let Some(kind) = self.fail {
                return Err(kind);
            }
            self.last_address = address;
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        for (slot, byte) in self.last_write.iter_mut().zip(bytes.iter()) {
                            *slot = *byte;
                        }
                    }
                    Operation::Read(buf) => {
                        for byte in buf.iter_mut() {
                            *byte = self.last_write[0];
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_adapter_forwards_write() {
        let mut bus = EhI2c::new(FakeBus::new());
        bus.write(0x68, &[0x07, 0xAA]).unwrap();

        let inner = bus.into_inner();
        assert_eq!(inner.last_address, 0x68);
        assert_eq!(inner.last_write, [0x07, 0xAA]);
    }

    #[test]
    fn test_adapter_forwards_write_read() {
        let mut bus = EhI2c::new(FakeBus::new());
        let mut buf = [0u8; 1];
        bus.write_read(0x68, &[0x22], &mut buf).unwrap();
        assert_eq!(buf[0], 0x22);
    }

    #[test]
    fn test_error_kind_mapping() {
        let mut fake = FakeBus::new();
        fake.fail = Some(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        let mut bus = EhI2c::new(fake);
        assert_eq!(bus.write(0x68, &[0x00]), Err(I2cBusError::AddressNack));

        assert_eq!(
            I2cBusError::from(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data)),
            I2cBusError::DataNack
        );
        assert_eq!(
            I2cBusError::from(ErrorKind::ArbitrationLoss),
            I2cBusError::ArbitrationLost
        );
        assert_eq!(I2cBusError::from(ErrorKind::Other), I2cBusError::Other);
    }

    #[test]
    fn test_mut_ref_is_a_bus() {
        fn poke<B: I2cBus>(mut bus: B) -> Result<(), B::Error> {
            bus.write(0x68, &[0x01, 0x02])
        }

        let mut bus = EhI2c::new(FakeBus::new());
        poke(&mut bus).unwrap();
        assert_eq!(bus.into_inner().last_write, [0x01, 0x02]);
    }
}
