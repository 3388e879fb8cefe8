fn main() {
    // `RUST_LOG_PRETTY=1 cargo build` switches the log output to the
    // multi-line pretty formatter.
    println!("cargo::rustc-check-cfg=cfg(tracing_pretty)");
    println!("cargo::rerun-if-env-changed=RUST_LOG_PRETTY");
    if std::env::var("RUST_LOG_PRETTY").as_deref() == Ok("1") {
        println!("cargo::rustc-cfg=tracing_pretty");
    }
}
