mod log;

pub use log::{
    BattleEvent,
    BattleLoggable,
    EventLog,
};
