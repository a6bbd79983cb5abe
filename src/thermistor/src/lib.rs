#![no_std]

mod calibration;
mod error;
mod monitor;
mod sampler;
mod thermistor;
mod units;

pub use calibration::{Attenuation, Bitwidth, CalibrationContext};
pub use error::Error;
pub use monitor::{CancellationToken, LogReporter, Monitor, Reading, Report};
pub use sampler::{AnalogChannel, AnalogFrontEnd, VoltageSampler};
pub use thermistor::{
    resistance_to_temperature, temperature_from_voltage, voltage_to_resistance,
    ThermistorConstants,
};
pub use units::{
    celsius_to_kelvin, kelvin_to_celsius, Celsius, Kelvin, Millivolts, Ohms, RawCode, Volts,
};

/// Take one fresh sample and convert it to degrees Celsius.
pub fn sample_temperature_degc<C: AnalogChannel>(
    sampler: &mut VoltageSampler<C>,
    constants: &ThermistorConstants,
) -> Result<Celsius, Error> {
    let voltage = sampler.read_voltage()?;

    temperature_from_voltage(voltage, constants)
}
