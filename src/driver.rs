//! Low-level SSD1306 command channel.
//!
//! Frames bytes with the controller's control-byte prefix and hands each
//! framed buffer to the bus as exactly one I2C write. There is no queue and
//! no retry: one channel call is one transaction.
//!
//! This module is crate-private — consumers interact with
//! [`Ssd1306`](crate::Ssd1306) instead, so every write goes through the
//! cursor bookkeeping in `display.rs`.

use embedded_hal::i2c::I2c;
use heapless::Vec;

use crate::commands::{CONTROL_COMMAND, CONTROL_DATA};
use crate::error::OledError;

/// Largest payload accepted by one burst.
///
/// Each payload byte travels with its own control byte, so a full burst is
/// a `2 * MAX_BURST_LEN` byte transaction.
pub const MAX_BURST_LEN: usize = 32;

const BURST_BUFFER_LEN: usize = 2 * MAX_BURST_LEN;

/// Owns the I2C transport and the device address.
pub(crate) struct CommandChannel<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> CommandChannel<I2C>
where
    I2C: I2c,
{
    /// # Arguments
    /// * `i2c` — I2C transport (owned, or `&mut` to a caller-owned bus)
    /// * `address` — 7-bit I2C device address
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    // -----------------------------------------------------------------------
    // Framing primitives
    // -----------------------------------------------------------------------

    /// Send one command byte as `[0x00, command]`.
    pub fn send_command(&mut self, command: u8) -> Result<(), OledError<I2C::Error>> {
        self.write(&[CONTROL_COMMAND, command])
    }

    /// Send one display RAM byte as `[0x40, data]`.
    pub fn send_data(&mut self, data: u8) -> Result<(), OledError<I2C::Error>> {
        self.write(&[CONTROL_DATA, data])
    }

    /// Send up to [`MAX_BURST_LEN`] command bytes in one transaction.
    ///
    /// Only for controllers that accept mixed-control-byte streams; the
    /// display layer addresses RAM with single-command writes.
    #[allow(dead_code)]
    pub fn send_multiple_commands(
        &mut self,
        commands: &[u8],
    ) -> Result<(), OledError<I2C::Error>> {
        self.send_interleaved(CONTROL_COMMAND, commands)
    }

    /// Send up to [`MAX_BURST_LEN`] display RAM bytes in one transaction.
    pub fn send_multiple_data(&mut self, data: &[u8]) -> Result<(), OledError<I2C::Error>> {
        self.send_interleaved(CONTROL_DATA, data)
    }

    /// Build `[prefix, b0, prefix, b1, ...]` and write it in one go.
    ///
    /// The length check happens before any bus traffic, so an oversized
    /// burst leaves the controller untouched. An empty payload sends
    /// nothing.
    fn send_interleaved(
        &mut self,
        prefix: u8,
        payload: &[u8],
    ) -> Result<(), OledError<I2C::Error>> {
        if payload.len() > MAX_BURST_LEN {
            return Err(OledError::BurstTooLong);
        }
        if payload.is_empty() {
            return Ok(());
        }

        let mut buf: Vec<u8, BURST_BUFFER_LEN> = Vec::new();
        for &byte in payload {
            buf.push(prefix).map_err(|_| OledError::BurstTooLong)?;
            buf.push(byte).map_err(|_| OledError::BurstTooLong)?;
        }

        self.write(&buf)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), OledError<I2C::Error>> {
        self.i2c.write(self.address, bytes).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::error!("I2C write to {=u8:#x} failed", self.address);
            OledError::Transport(e)
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;
    use std::vec::Vec;

    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    use super::*;

    const ADDR: u8 = 0x3C;

    #[test]
    fn single_command_is_prefixed_with_command_control_byte() {
        let mut i2c = I2cMock::new(&[I2cTransaction::write(ADDR, vec![0x00, 0xAE])]);
        let mut channel = CommandChannel::new(i2c.clone(), ADDR);

        channel.send_command(0xAE).unwrap();
        i2c.done();
    }

    #[test]
    fn single_data_byte_is_prefixed_with_data_control_byte() {
        let mut i2c = I2cMock::new(&[I2cTransaction::write(ADDR, vec![0x40, 0x5A])]);
        let mut channel = CommandChannel::new(i2c.clone(), ADDR);

        channel.send_data(0x5A).unwrap();
        i2c.done();
    }

    #[test]
    fn data_burst_interleaves_prefix_in_one_transaction() {
        let mut i2c = I2cMock::new(&[I2cTransaction::write(
            ADDR,
            vec![0x40, 0x01, 0x40, 0x02, 0x40, 0x03],
        )]);
        let mut channel = CommandChannel::new(i2c.clone(), ADDR);

        channel.send_multiple_data(&[0x01, 0x02, 0x03]).unwrap();
        i2c.done();
    }

    #[test]
    fn command_burst_interleaves_prefix_in_one_transaction() {
        let mut i2c = I2cMock::new(&[I2cTransaction::write(
            ADDR,
            vec![0x00, 0x81, 0x00, 0xCF],
        )]);
        let mut channel = CommandChannel::new(i2c.clone(), ADDR);

        channel.send_multiple_commands(&[0x81, 0xCF]).unwrap();
        i2c.done();
    }

    #[test]
    fn full_burst_fits_the_buffer() {
        let payload = [0xFFu8; MAX_BURST_LEN];
        let expected: Vec<u8> = payload.iter().flat_map(|&b| [0x40, b]).collect();
        let mut i2c = I2cMock::new(&[I2cTransaction::write(ADDR, expected)]);
        let mut channel = CommandChannel::new(i2c.clone(), ADDR);

        channel.send_multiple_data(&payload).unwrap();
        i2c.done();
    }

    #[test]
    fn oversized_burst_is_rejected_without_bus_traffic() {
        let mut i2c = I2cMock::new(&[]);
        let mut channel = CommandChannel::new(i2c.clone(), ADDR);

        let payload = [0u8; MAX_BURST_LEN + 1];
        assert_eq!(
            channel.send_multiple_data(&payload),
            Err(OledError::BurstTooLong)
        );
        assert_eq!(
            channel.send_multiple_commands(&payload),
            Err(OledError::BurstTooLong)
        );
        i2c.done();
    }

    #[test]
    fn empty_burst_sends_nothing() {
        let mut i2c = I2cMock::new(&[]);
        let mut channel = CommandChannel::new(i2c.clone(), ADDR);

        channel.send_multiple_data(&[]).unwrap();
        i2c.done();
    }

    #[test]
    fn bus_failure_surfaces_as_transport_error() {
        let mut i2c = I2cMock::new(&[
            I2cTransaction::write(ADDR, vec![0x00, 0xAF]).with_error(ErrorKind::Other)
        ]);
        let mut channel = CommandChannel::new(i2c.clone(), ADDR);

        assert_eq!(
            channel.send_command(0xAF),
            Err(OledError::Transport(ErrorKind::Other))
        );
        i2c.done();
    }
}
