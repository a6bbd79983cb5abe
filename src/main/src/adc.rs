use esp_idf_svc::hal::{
    adc::{
        oneshot::{
            config::{AdcChannelConfig, Calibration},
            AdcChannelDriver, AdcDriver,
        },
        ADC1,
    },
    gpio::Gpio34,
};
use esp_idf_svc::sys::EspError;
use log::*;

use thermistor::{
    AnalogChannel, AnalogFrontEnd, CalibrationContext, Error, Millivolts, RawCode,
};

mod config;

pub use config::*;

// Unconfigured ADC1 and the pin wired to the divider
pub struct EspAdc1 {
    adc: ADC1,
    pin: Gpio34,
}

impl EspAdc1 {
    pub fn new(adc: ADC1, pin: Gpio34) -> Self {
        EspAdc1 { adc, pin }
    }
}

pub struct EspAnalogChannel {
    driver: AdcChannelDriver<'static, Gpio34, AdcDriver<'static, ADC1>>,
}

fn hardware_init(e: EspError) -> Error {
    error!("Failed to configure ADC: {} ({})", e, e.code());
    Error::HardwareInit
}

fn conversion(e: EspError) -> Error {
    warn!("ADC conversion failed: {} ({})", e, e.code());
    Error::Conversion
}

impl AnalogFrontEnd for EspAdc1 {
    type Channel = EspAnalogChannel;

    fn configure_analog_channel(self, context: &CalibrationContext) -> Result<EspAnalogChannel, Error> {
        if context.channel != THERMISTOR_CHANNEL {
            error!(
                "ADC1 channel {} requested, but the thermistor is on channel {}",
                context.channel, THERMISTOR_CHANNEL
            );
            return Err(Error::HardwareInit);
        }
        if context.bitwidth != NATIVE_BITWIDTH {
            error!("No line fitting calibration for {:?}", context.bitwidth);
            return Err(Error::HardwareInit);
        }

        let adc = AdcDriver::new(self.adc).map_err(hardware_init)?;
        let config = AdcChannelConfig {
            attenuation: attenuation(context.attenuation),
            calibration: Calibration::Line,
            ..Default::default()
        };
        let driver = AdcChannelDriver::new(adc, self.pin, &config).map_err(hardware_init)?;

        Ok(EspAnalogChannel { driver })
    }
}

impl AnalogChannel for EspAnalogChannel {
    fn sample_raw(&mut self) -> Result<RawCode, Error> {
        let raw = self.driver.read_raw().map_err(conversion)?;
        Ok(RawCode::new(raw))
    }

    fn raw_to_millivolts(&self, raw: RawCode) -> Result<Millivolts, Error> {
        let millivolts = self.driver.raw_to_mv(u16::from(raw)).map_err(conversion)?;
        Ok(Millivolts::new(i32::from(millivolts)))
    }
}
