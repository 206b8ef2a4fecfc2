pub mod pump_control;
pub mod record_history;
pub mod sensor_drift;
