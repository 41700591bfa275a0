use thiserror::Error as ThisError;

#[derive(ThisError, Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    #[error("engine config can not be parsed")]
    ConfigParseError = 100,
    #[error("refresh interval must be positive")]
    InvalidRefreshInterval = 101,
    #[error("depth levels must be positive")]
    InvalidDepthLevels = 102,

    #[error("invalid address")]
    InvalidAddress = 200,
    #[error("order book level must have non negative price and size")]
    InvalidOrderBook = 201,
    #[error("snapshot is not available")]
    SnapshotUnavailable = 202,

    #[error("value must be less or equal to 100%")]
    MustBeLtePercentDenominator = 300,
    #[error("value must be less than 100%")]
    MustBeLtPercentDenominator = 301,
    #[error("borrow rates must satisfy min <= optimal <= max")]
    InvalidBorrowRates = 302,
    #[error("liquidation threshold must be greater than loan to value ratio")]
    InvalidLiquidationThreshold = 303,
    #[error("borrow fee must be less than 1")]
    InvalidBorrowFee = 304,
}

impl Error {
    pub fn code(self) -> u32 {
        self as u32
    }
}
