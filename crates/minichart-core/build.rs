// File: crates/minichart-core/build.rs
// Summary: Links the extra Windows system libraries Skia's font backend needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, ...
        println!("cargo:rustc-link-lib=advapi32");
    }
}
