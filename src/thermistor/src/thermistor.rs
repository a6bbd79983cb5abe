use crate::error::Error;
use crate::units::{kelvin_to_celsius, Celsius, Kelvin, Ohms, Volts};

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ThermistorConstants {
    supply_voltage: Volts,
    series_resistance: Ohms,
    // Kelvins
    beta: f32,
    reference_temperature: Kelvin,
    reference_resistance: Ohms,
}

impl ThermistorConstants {
    // NTCLE100E3472JB0 below a 4.64k series resistor on the 3.3V rail
    pub const REFERENCE: ThermistorConstants = ThermistorConstants {
        supply_voltage: Volts(3.3),
        series_resistance: Ohms(4640.0),
        beta: 3977.0,
        reference_temperature: Kelvin(298.15),
        reference_resistance: Ohms(4700.0),
    };

    pub fn new(
        supply_voltage: Volts,
        series_resistance: Ohms,
        beta: f32,
        reference_temperature: Kelvin,
        reference_resistance: Ohms,
    ) -> Result<Self, Error> {
        let positive = |value: f32| value.is_finite() && value > 0.0;

        if !positive(supply_voltage.0)
            || !positive(series_resistance.0)
            || !positive(beta)
            || !positive(reference_temperature.0)
            || !positive(reference_resistance.0)
        {
            return Err(Error::InvalidConstants);
        }

        Ok(Self {
            supply_voltage,
            series_resistance,
            beta,
            reference_temperature,
            reference_resistance,
        })
    }
}

impl Default for ThermistorConstants {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Resistance of the thermistor from the voltage measured across it.
///
/// Only voltages in `[0, supply)` describe the divider; anything else is an
/// `InvalidReading` rather than a negative or infinite resistance.
pub fn voltage_to_resistance(voltage: Volts, constants: &ThermistorConstants) -> Result<Ohms, Error> {
    //                      v_measured
    // r = r_series * ---------------------
    //                v_supply - v_measured

    let v_measured = voltage.0;
    let v_supply = constants.supply_voltage.0;

    if !v_measured.is_finite() || v_measured < 0.0 || v_measured >= v_supply {
        return Err(Error::InvalidReading);
    }

    let resistance = constants.series_resistance.0 * v_measured / (v_supply - v_measured);

    Ok(Ohms(resistance))
}

/// Beta model temperature for a thermistor resistance.
pub fn resistance_to_temperature(
    resistance: Ohms,
    constants: &ThermistorConstants,
) -> Result<Kelvin, Error> {
    //                  beta * t_ref
    // t = ------------------------------------
    //      t_ref * ln(r / r_ref)   +   beta

    let r = resistance.0;
    if !r.is_finite() || r <= 0.0 {
        return Err(Error::InvalidReading);
    }

    let r_ref = constants.reference_resistance.0;
    let t_ref = constants.reference_temperature.0;

    if r == r_ref {
        return Ok(constants.reference_temperature);
    }

    let beta = constants.beta;
    let resistance_ratio = r / r_ref;

    let denominator = t_ref * libm::logf(resistance_ratio) + beta;
    if !denominator.is_finite() || denominator <= 0.0 {
        return Err(Error::InvalidReading);
    }

    let temperature = beta * t_ref / denominator;
    if !temperature.is_finite() {
        return Err(Error::InvalidReading);
    }

    Ok(Kelvin(temperature))
}

pub fn temperature_from_voltage(
    voltage: Volts,
    constants: &ThermistorConstants,
) -> Result<Celsius, Error> {
    let resistance = voltage_to_resistance(voltage, constants)?;
    let temperature = resistance_to_temperature(resistance, constants)?;

    Ok(kelvin_to_celsius(temperature))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONSTANTS: ThermistorConstants = ThermistorConstants::REFERENCE;

    #[test]
    fn test_resistance_at_half_supply() {
        let r = voltage_to_resistance(Volts::new(1.65), &CONSTANTS).unwrap();
        assert!(r > Ohms::new(4639.9), "{:?}", r);
        assert!(r < Ohms::new(4640.1), "{:?}", r);
    }

    #[test]
    fn test_resistance_is_positive_and_increasing() {
        let mut previous = voltage_to_resistance(Volts::new(0.01), &CONSTANTS).unwrap();
        assert!(previous > Ohms::new(0.0));

        for step in 2..330 {
            let voltage = Volts::new(step as f32 * 0.01);
            let r = voltage_to_resistance(voltage, &CONSTANTS).unwrap();
            assert!(f32::from(r).is_finite(), "{:?} at {:?}", r, voltage);
            assert!(r > previous, "{:?} <= {:?} at {:?}", r, previous, voltage);
            previous = r;
        }
    }

    #[test]
    fn test_resistance_at_zero_volts() {
        let r = voltage_to_resistance(Volts::new(0.0), &CONSTANTS).unwrap();
        assert_eq!(r, Ohms::new(0.0));
    }

    #[test]
    fn test_resistance_at_or_above_supply() {
        for voltage in [3.3, 3.31, 5.0] {
            let result = voltage_to_resistance(Volts::new(voltage), &CONSTANTS);
            assert_eq!(result, Err(Error::InvalidReading), "{}", voltage);
        }
    }

    #[test]
    fn test_resistance_negative_or_nan_voltage() {
        let result = voltage_to_resistance(Volts::new(-0.1), &CONSTANTS);
        assert_eq!(result, Err(Error::InvalidReading));

        let result = voltage_to_resistance(Volts::new(f32::NAN), &CONSTANTS);
        assert_eq!(result, Err(Error::InvalidReading));
    }

    #[test]
    fn test_temperature_at_reference_resistance() {
        let t = resistance_to_temperature(Ohms::new(4700.0), &CONSTANTS).unwrap();
        let difference = f32::from(t) - 298.15;
        assert!(-1e-3 < difference && difference < 1e-3, "{:?}", t);
    }

    #[test]
    fn test_temperature_from_ntc_resistance() {
        // Either side of the reference point, then the 0 degree resistance
        let t = kelvin_to_celsius(resistance_to_temperature(Ohms::new(4701.0), &CONSTANTS).unwrap());
        assert!(t < Celsius::new(25.0));
        assert!(t > Celsius::new(24.95));

        let t = kelvin_to_celsius(resistance_to_temperature(Ohms::new(4699.0), &CONSTANTS).unwrap());
        assert!(t > Celsius::new(25.0));
        assert!(t < Celsius::new(25.05));

        let t = kelvin_to_celsius(resistance_to_temperature(Ohms::new(15_934.0), &CONSTANTS).unwrap());
        assert!(t > Celsius::new(-0.5), "{:?}", t);
        assert!(t < Celsius::new(0.5), "{:?}", t);
    }

    #[test]
    fn test_temperature_warm_side() {
        // ratio below 1; exact beta value is 64.131 degrees
        let t = kelvin_to_celsius(resistance_to_temperature(Ohms::new(1000.0), &CONSTANTS).unwrap());
        assert!(t > Celsius::new(64.08), "{:?}", t);
        assert!(t < Celsius::new(64.18), "{:?}", t);
    }

    #[test]
    fn test_temperature_zero_resistance() {
        let result = resistance_to_temperature(Ohms::new(0.0), &CONSTANTS);
        assert_eq!(result, Err(Error::InvalidReading));

        let result = resistance_to_temperature(Ohms::new(-10.0), &CONSTANTS);
        assert_eq!(result, Err(Error::InvalidReading));
    }

    #[test]
    fn test_temperature_infinite_resistance() {
        let result = resistance_to_temperature(Ohms::new(f32::INFINITY), &CONSTANTS);
        assert_eq!(result, Err(Error::InvalidReading));
    }

    #[test]
    fn test_temperature_decreases_with_voltage() {
        let mut previous = temperature_from_voltage(Volts::new(0.1), &CONSTANTS).unwrap();

        for step in 2..33 {
            let voltage = Volts::new(step as f32 * 0.1 - 0.001);
            let t = temperature_from_voltage(voltage, &CONSTANTS).unwrap();
            assert!(t < previous, "{:?} >= {:?} at {:?}", t, previous, voltage);
            previous = t;
        }
    }

    #[test]
    fn test_temperature_at_half_supply() {
        // r = 4640 ohms, t = 3977 * 298.15 / (298.15 * ln(4640 / 4700) + 3977)
        let t = temperature_from_voltage(Volts::new(1.65), &CONSTANTS).unwrap();
        assert!(t > Celsius::new(25.24), "{:?}", t);
        assert!(t < Celsius::new(25.34), "{:?}", t);
    }

    #[test]
    fn test_temperature_at_zero_volts() {
        let result = temperature_from_voltage(Volts::new(0.0), &CONSTANTS);
        assert_eq!(result, Err(Error::InvalidReading));
    }

    #[test]
    fn test_invalid_constants() {
        let result = ThermistorConstants::new(
            Volts::new(3.3),
            Ohms::new(0.0),
            3977.0,
            Kelvin::new(298.15),
            Ohms::new(4700.0),
        );
        assert_eq!(result, Err(Error::InvalidConstants));

        let result = ThermistorConstants::new(
            Volts::new(3.3),
            Ohms::new(4640.0),
            3977.0,
            Kelvin::new(298.15),
            Ohms::new(-4700.0),
        );
        assert_eq!(result, Err(Error::InvalidConstants));
    }

    #[test]
    fn test_reference_constants() {
        let constants = ThermistorConstants::new(
            Volts::new(3.3),
            Ohms::new(4640.0),
            3977.0,
            Kelvin::new(298.15),
            Ohms::new(4700.0),
        );
        assert_eq!(constants, Ok(ThermistorConstants::REFERENCE));
    }
}
