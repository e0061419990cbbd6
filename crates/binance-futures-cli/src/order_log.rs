/*
[INPUT]:  Order type and record text from the placement flow
[OUTPUT]: Appended lines in logs/market_order.log or logs/limit_order.log
[POS]:    Logging layer - file-backed OrderLog implementation
[UPDATE]: When log file naming or record format changes
*/

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use binance_futures_adapter::{OrderLog, OrderType};
use chrono::Local;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

pub const MARKET_LOG_FILE: &str = "market_order.log";
pub const LIMIT_LOG_FILE: &str = "limit_order.log";

pub fn log_file_name(order_type: OrderType) -> &'static str {
    match order_type {
        OrderType::Market => MARKET_LOG_FILE,
        OrderType::Limit => LIMIT_LOG_FILE,
    }
}

/// Appends order records to one file per order type.
///
/// Files (and the directory) are created on first write.
pub struct FileOrderLog {
    dir: PathBuf,
    market: Option<RollingFileAppender>,
    limit: Option<RollingFileAppender>,
}

impl FileOrderLog {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            market: None,
            limit: None,
        }
    }

    pub fn path_for(&self, order_type: OrderType) -> PathBuf {
        self.dir.join(log_file_name(order_type))
    }

    fn appender(&mut self, order_type: OrderType) -> io::Result<&mut RollingFileAppender> {
        let slot = match order_type {
            OrderType::Market => &mut self.market,
            OrderType::Limit => &mut self.limit,
        };
        if slot.is_none() {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(log_file_name(order_type))
                .build(&self.dir)
                .map_err(io::Error::other)?;
            *slot = Some(appender);
        }
        slot.as_mut()
            .ok_or_else(|| io::Error::other("order log appender unavailable"))
    }
}

impl OrderLog for FileOrderLog {
    fn write(&mut self, order_type: OrderType, record: &str) -> io::Result<()> {
        let line = format!(
            "{} - INFO - {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            record.replace('\n', " ")
        );
        let appender = self.appender(order_type)?;
        appender.write_all(line.as_bytes())?;
        appender.flush()
    }
}
