use log::*;

use crate::calibration::CalibrationContext;
use crate::error::Error;
use crate::units::{Millivolts, RawCode, Volts};

/// Hardware that can be configured into a calibrated analog channel.
///
/// Configuring consumes the peripheral: the channel owns the analog unit for
/// the rest of the process.
pub trait AnalogFrontEnd {
    type Channel: AnalogChannel;

    fn configure_analog_channel(self, context: &CalibrationContext) -> Result<Self::Channel, Error>;
}

pub trait AnalogChannel {
    /// Trigger one conversion and return the unconverted code.
    fn sample_raw(&mut self) -> Result<RawCode, Error>;

    /// Apply the calibration scheme to a raw code.
    fn raw_to_millivolts(&self, raw: RawCode) -> Result<Millivolts, Error>;
}

pub struct VoltageSampler<C> {
    channel: C,
    context: CalibrationContext,
}

impl<C: AnalogChannel> VoltageSampler<C> {
    pub fn initialize<F>(front_end: F, context: CalibrationContext) -> Result<Self, Error>
    where
        F: AnalogFrontEnd<Channel = C>,
    {
        let channel = front_end.configure_analog_channel(&context)?;
        info!(
            "Configured analog channel {} ({:?}, {} bit)",
            context.channel,
            context.attenuation,
            context.bitwidth.bits()
        );

        Ok(VoltageSampler { channel, context })
    }

    pub fn context(&self) -> &CalibrationContext {
        &self.context
    }

    // Every call is a fresh conversion
    pub fn read_voltage(&mut self) -> Result<Volts, Error> {
        let raw = self.channel.sample_raw()?;
        if !self.context.accepts(raw) {
            warn!(
                "Raw code {} exceeds {} bit range",
                u16::from(raw),
                self.context.bitwidth.bits()
            );
            return Err(Error::Conversion);
        }

        let millivolts = self.channel.raw_to_millivolts(raw)?;
        if millivolts < Millivolts::new(0) {
            return Err(Error::Conversion);
        }

        trace!("raw={} mv={}", u16::from(raw), i32::from(millivolts));

        Ok(Volts::from(millivolts))
    }
}
