use anyhow::Result;

#[cfg(target_os = "espidf")]
mod adc;
#[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
mod config;

#[cfg(target_os = "espidf")]
fn main() -> Result<()> {
    use esp_idf_svc::hal::{delay::FreeRtos, prelude::Peripherals};
    use log::*;
    use thermistor::{CancellationToken, LogReporter, Monitor, VoltageSampler};

    use adc::EspAdc1;
    use config::Config;

    // Never cancelled on the device
    static SAMPLING: CancellationToken = CancellationToken::new();

    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take()?;

    let config = Config::read()?;

    let front_end = EspAdc1::new(peripherals.adc1, peripherals.pins.gpio34);
    let sampler = VoltageSampler::initialize(front_end, config.calibration).inspect_err(|e| {
        error!("Cannot sample the thermistor: {}", e);
    })?;

    let mut monitor = Monitor::new(sampler, config.thermistor, config.sample_period_ms);
    monitor.run(&mut LogReporter, &mut FreeRtos, &SAMPLING);

    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn main() -> Result<()> {
    anyhow::bail!("ntc-thermometer drives the ESP32 ADC; build it for an espidf target")
}
