use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;
use log::*;

use crate::error::Error;
use crate::sample_temperature_degc;
use crate::sampler::{AnalogChannel, VoltageSampler};
use crate::thermistor::ThermistorConstants;
use crate::units::Celsius;

/// Stops a running `Monitor` before its next sampling period.
///
/// Can live in a `static`; firmware never cancels it and samples forever.
pub struct CancellationToken {
    cancelled: AtomicBool,
}

impl CancellationToken {
    pub const fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Reading {
    // Starts at 1
    pub count: u32,
    pub temperature: Celsius,
}

pub trait Report {
    type Error: core::fmt::Debug;

    fn report(&mut self, reading: &Reading) -> Result<(), Self::Error>;

    fn report_failure(&mut self, count: u32, error: &Error) -> Result<(), Self::Error>;
}

pub struct LogReporter;

impl Report for LogReporter {
    type Error = core::convert::Infallible;

    fn report(&mut self, reading: &Reading) -> Result<(), Self::Error> {
        info!("{}. temperature is {}", reading.count, reading.temperature);
        Ok(())
    }

    fn report_failure(&mut self, count: u32, error: &Error) -> Result<(), Self::Error> {
        error!("{}. temperature reading failed: {}", count, error);
        Ok(())
    }
}

pub struct Monitor<C> {
    sampler: VoltageSampler<C>,
    constants: ThermistorConstants,
    period_ms: u32,
    count: u32,
}

impl<C: AnalogChannel> Monitor<C> {
    pub fn new(sampler: VoltageSampler<C>, constants: ThermistorConstants, period_ms: u32) -> Self {
        Self {
            sampler,
            constants,
            period_ms,
            count: 0,
        }
    }

    /// One sample, convert and report cycle.
    ///
    /// A failed period is reported and returned, and leaves nothing behind for
    /// the next one apart from the counter.
    pub fn step<R: Report>(&mut self, reporter: &mut R) -> Result<Reading, Error> {
        self.count = self.count.wrapping_add(1);

        let result = sample_temperature_degc(&mut self.sampler, &self.constants).map(|temperature| {
            Reading {
                count: self.count,
                temperature,
            }
        });

        let reported = match &result {
            Ok(reading) => reporter.report(reading),
            Err(error) => reporter.report_failure(self.count, error),
        };
        if let Err(e) = reported {
            warn!("Failed to report reading {}: {:?}", self.count, e);
        }

        result
    }

    pub fn run<R, D>(&mut self, reporter: &mut R, delay: &mut D, cancel: &CancellationToken) -> u32
    where
        R: Report,
        D: DelayNs,
    {
        info!("Sampling every {} ms", self.period_ms);

        while !cancel.is_cancelled() {
            let _ = self.step(reporter);
            delay.delay_ms(self.period_ms);
        }

        info!("Sampling stopped after {} readings", self.count);
        self.count
    }
}
