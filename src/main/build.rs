fn main() {
    println!("cargo:rerun-if-changed=cfg.toml");

    // Only the ESP-IDF build exports these; host builds are a no-op
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }
}
