use core::fmt;

static KELVIN_OFFSET: f32 = 273.15;

// Calibrated input voltage, in volts
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct Volts(pub f32);

impl Volts {
    pub fn new(value: f32) -> Self {
        Self(value)
    }
}

impl From<Volts> for f32 {
    fn from(value: Volts) -> f32 {
        value.0
    }
}

impl From<Millivolts> for Volts {
    fn from(value: Millivolts) -> Volts {
        Volts(value.0 as f32 / 1000.0)
    }
}

// Output of the ADC calibration scheme
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct Millivolts(pub i32);

impl Millivolts {
    pub fn new(value: i32) -> Self {
        Self(value)
    }
}

impl From<Millivolts> for i32 {
    fn from(value: Millivolts) -> i32 {
        value.0
    }
}

#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct Ohms(pub f32);

impl Ohms {
    pub fn new(value: f32) -> Self {
        Self(value)
    }
}

impl From<Ohms> for f32 {
    fn from(value: Ohms) -> f32 {
        value.0
    }
}

// Absolute temperature
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct Kelvin(pub f32);

impl Kelvin {
    pub fn new(value: f32) -> Self {
        Self(value)
    }
}

impl From<Kelvin> for f32 {
    fn from(value: Kelvin) -> f32 {
        value.0
    }
}

// Temperature in degrees celsius
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct Celsius(pub f32);

impl Celsius {
    pub fn new(value: f32) -> Self {
        Self(value)
    }
}

impl From<Celsius> for f32 {
    fn from(value: Celsius) -> f32 {
        value.0
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} °C", self.0)
    }
}

// Unconverted ADC output code
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
pub struct RawCode(pub u16);

impl RawCode {
    pub fn new(value: u16) -> Self {
        Self(value)
    }
}

impl From<RawCode> for u16 {
    fn from(value: RawCode) -> u16 {
        value.0
    }
}

pub fn kelvin_to_celsius(temperature: Kelvin) -> Celsius {
    Celsius(temperature.0 - KELVIN_OFFSET)
}

pub fn celsius_to_kelvin(temperature: Celsius) -> Kelvin {
    Kelvin(temperature.0 + KELVIN_OFFSET)
}
