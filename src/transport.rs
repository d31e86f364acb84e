//! Raw byte transport to a display.
//!
//! The exchange engine only needs to select the DDC/CI slave address, write a
//! request and read back a reply. [`ReadWriteTransport`] does this with plain
//! `read()`/`write()` calls and [`BulkTransport`] with `ioctl(I2C_RDWR)`
//! messages, both over any [`i2c`] device.

use std::io;
use log::trace;
use resize_slice::ResizeSlice;
#[cfg(feature = "i2c-linux")]
use crate::config::IoStrategy;

/// A bus handle the exchange engine writes requests to and reads replies from.
pub trait Transport {
    /// Selects the I2C slave address for subsequent transfers.
    fn set_slave_address(&mut self, address: u16) -> io::Result<()>;

    /// Writes one request.
    fn write(&mut self, data: &[u8]) -> io::Result<()>;

    /// Reads a reply into `data`, returning the number of bytes received.
    fn read(&mut self, data: &mut [u8]) -> io::Result<usize>;
}

impl<'a, T: Transport + ?Sized> Transport for &'a mut T {
    fn set_slave_address(&mut self, address: u16) -> io::Result<()> {
        (**self).set_slave_address(address)
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        (**self).write(data)
    }

    fn read(&mut self, data: &mut [u8]) -> io::Result<usize> {
        (**self).read(data)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn set_slave_address(&mut self, address: u16) -> io::Result<()> {
        (**self).set_slave_address(address)
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        (**self).write(data)
    }

    fn read(&mut self, data: &mut [u8]) -> io::Result<usize> {
        (**self).read(data)
    }
}

/// Transport over `read()` and `write()` on an I2C device.
#[derive(Clone, Debug)]
pub struct ReadWriteTransport<I> {
    inner: I,
}

impl<I> ReadWriteTransport<I> {
    /// Wraps an open device.
    pub fn new(i2c: I) -> Self {
        ReadWriteTransport {
            inner: i2c,
        }
    }

    /// Consume the transport to return the inner device.
    pub fn into_inner(self) -> I {
        self.inner
    }

    /// Borrow the inner device.
    pub fn inner_ref(&self) -> &I {
        &self.inner
    }

    /// Mutably borrow the inner device.
    pub fn inner_mut(&mut self) -> &mut I {
        &mut self.inner
    }
}

impl<I: i2c::Address + i2c::ReadWrite> Transport for ReadWriteTransport<I> where
    I::Error: Into<io::Error>,
{
    fn set_slave_address(&mut self, address: u16) -> io::Result<()> {
        self.inner.set_slave_address(address, false).map_err(Into::into)
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        trace!("write {:02x?}", data);
        self.inner.i2c_write(data).map_err(Into::into)
    }

    fn read(&mut self, data: &mut [u8]) -> io::Result<usize> {
        let len = self.inner.i2c_read(data).map_err(Into::into)?;
        trace!("read {:02x?}", &data[..len.min(data.len())]);
        Ok(len)
    }
}

/// Transport over `ioctl(I2C_RDWR)` message transfers.
#[derive(Clone, Debug)]
pub struct BulkTransport<I> {
    inner: I,
    address: u16,
}

impl<I> BulkTransport<I> {
    /// Wraps an open device.
    pub fn new(i2c: I) -> Self {
        BulkTransport {
            inner: i2c,
            address: crate::I2C_ADDRESS_DDC_CI,
        }
    }

    /// Consume the transport to return the inner device.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: i2c::BulkTransfer> Transport for BulkTransport<I> where
    I::Error: Into<io::Error>,
{
    fn set_slave_address(&mut self, address: u16) -> io::Result<()> {
        self.address = address;
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        trace!("write {:02x?}", data);
        let mut msgs = [
            i2c::Message::Write {
                address: self.address,
                data: data,
                flags: Default::default(),
            },
        ];
        self.inner.i2c_transfer(&mut msgs).map_err(Into::into)
    }

    fn read(&mut self, mut data: &mut [u8]) -> io::Result<usize> {
        let len = {
            let mut msgs = [
                i2c::Message::Read {
                    address: self.address,
                    data: &mut data[..],
                    flags: Default::default(),
                },
            ];
            self.inner.i2c_transfer(&mut msgs).map_err(Into::into)?;
            msgs[0].len()
        };
        data.resize_to(len);
        trace!("read {:02x?}", data);

        Ok(len)
    }
}

/// Opens `/dev/i2c-N` with the given strategy.
#[cfg(feature = "i2c-linux")]
pub fn open<P: AsRef<std::path::Path>>(path: P, strategy: IoStrategy) -> io::Result<Box<dyn Transport + Send>> {
    let i2c = i2c_linux::I2c::from_path(path)?;
    Ok(match strategy {
        IoStrategy::FileIo => Box::new(ReadWriteTransport::new(i2c)),
        IoStrategy::Ioctl => Box::new(BulkTransport::new(i2c)),
    })
}
