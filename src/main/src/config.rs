use thermistor::{CalibrationContext, Error, Kelvin, Ohms, ThermistorConstants, Volts};

#[toml_cfg::toml_config]
pub struct TomlConfig {
    #[default(1000)]
    sample_period_ms: u32,
    #[default(3.3)]
    supply_voltage: f32,
    #[default(4640.0)]
    series_resistance: f32,
    #[default(3977.0)]
    beta: f32,
    #[default(298.15)]
    reference_temperature: f32,
    #[default(4700.0)]
    reference_resistance: f32,
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub sample_period_ms: u32,
    pub thermistor: ThermistorConstants,
    pub calibration: CalibrationContext,
}

impl Config {
    pub fn read() -> Result<Self, Error> {
        Config::try_from(TOML_CONFIG)
    }
}

impl TryFrom<TomlConfig> for Config {
    type Error = Error;

    fn try_from(config: TomlConfig) -> Result<Self, Error> {
        let thermistor = ThermistorConstants::new(
            Volts::new(config.supply_voltage),
            Ohms::new(config.series_resistance),
            config.beta,
            Kelvin::new(config.reference_temperature),
            Ohms::new(config.reference_resistance),
        )?;

        Ok(Config {
            sample_period_ms: config.sample_period_ms,
            thermistor,
            ..Config::default()
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sample_period_ms: 1000,
            thermistor: ThermistorConstants::REFERENCE,
            calibration: CalibrationContext::default(),
        }
    }
}
