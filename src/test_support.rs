//! Recording transport shared by the unit tests

use display_interface::{AsyncWriteOnlyDataCommand, DataFormat, DisplayError, WriteOnlyDataCommand};
use std::vec::Vec;

/// One bus transaction as seen by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Write {
    Command(u8),
    Data(u8),
}

/// Transport that records every write, optionally failing after a number of them
pub struct MockInterface {
    pub writes: Vec<Write>,
    fail_after: Option<usize>,
}

impl MockInterface {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            fail_after: None,
        }
    }

    /// Accept `n` writes, then report a bus error for every one after
    pub fn failing_after(n: usize) -> Self {
        Self {
            writes: Vec::new(),
            fail_after: Some(n),
        }
    }

    pub fn commands(&self) -> Vec<u8> {
        self.writes
            .iter()
            .filter_map(|w| match w {
                Write::Command(c) => Some(*c),
                Write::Data(_) => None,
            })
            .collect()
    }

    pub fn data(&self) -> Vec<u8> {
        self.writes
            .iter()
            .filter_map(|w| match w {
                Write::Data(d) => Some(*d),
                Write::Command(_) => None,
            })
            .collect()
    }

    fn record(&mut self, buf: DataFormat<'_>, kind: fn(u8) -> Write) -> Result<(), DisplayError> {
        if self.fail_after.is_some_and(|n| self.writes.len() >= n) {
            return Err(DisplayError::BusWriteError);
        }
        match buf {
            DataFormat::U8(bytes) => {
                assert_eq!(bytes.len(), 1, "every byte must be its own transaction");
                self.writes.push(kind(bytes[0]));
                Ok(())
            }
            _ => Err(DisplayError::DataFormatNotImplemented),
        }
    }
}

impl WriteOnlyDataCommand for MockInterface {
    fn send_commands(&mut self, cmd: DataFormat<'_>) -> Result<(), DisplayError> {
        self.record(cmd, Write::Command)
    }

    fn send_data(&mut self, buf: DataFormat<'_>) -> Result<(), DisplayError> {
        self.record(buf, Write::Data)
    }
}

impl AsyncWriteOnlyDataCommand for MockInterface {
    async fn send_commands(&mut self, cmd: DataFormat<'_>) -> Result<(), DisplayError> {
        self.record(cmd, Write::Command)
    }

    async fn send_data(&mut self, buf: DataFormat<'_>) -> Result<(), DisplayError> {
        self.record(buf, Write::Data)
    }
}

/// Drive a driver call to completion in either flavour of the API
#[cfg(feature = "blocking")]
macro_rules! run {
    ($e:expr) => {
        $e
    };
}

#[cfg(not(feature = "blocking"))]
macro_rules! run {
    ($e:expr) => {
        embassy_futures::block_on($e)
    };
}

pub(crate) use run;
