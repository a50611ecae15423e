// File: crates/gascost-chart/build.rs
// Summary: Build script linking the Windows system libraries Skia's font manager and ICU need.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, ... used by the font manager
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
