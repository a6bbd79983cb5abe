use core::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    // Analog channel or calibration scheme could not be configured
    HardwareInit,
    // Raw sample or calibration lookup failed for one period
    Conversion,
    // Voltage outside [0, supply) or a resistance with no defined temperature
    InvalidReading,
    // Physical constants that cannot describe a voltage divider
    InvalidConstants,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::HardwareInit => write!(f, "analog front end could not be configured"),
            Error::Conversion => write!(f, "analog conversion failed"),
            Error::InvalidReading => write!(f, "reading is outside the thermistor model range"),
            Error::InvalidConstants => write!(f, "invalid thermistor constants"),
        }
    }
}

impl core::error::Error for Error {}
