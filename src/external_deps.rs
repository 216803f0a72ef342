pub use chrono::NaiveDate;
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use once_cell::sync::Lazy as once_lazy;
pub use sqlx::{Connection, PgConnection, Row, postgres::PgRow};
pub use urlencoding::encode;
