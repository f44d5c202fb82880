/// Expose the compilation target triple as an environment variable at build time.
///
/// The `version` command uses `env!("TARGET")` to report which platform the
/// binary was built for.
fn main() {
    println!(
        "cargo:rustc-env=TARGET={}",
        std::env::var("TARGET").unwrap()
    );
}
