pub mod export;
pub mod intake;
pub mod qualifier;
pub mod rate_sheet;
