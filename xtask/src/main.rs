//! Build automation tasks for ASTRO-HOP
//!
//! Usage:
//!   cargo xtask build-web            # Build WASM for web deployment
//!   cargo xtask package              # Native release build with assets
//!   cargo xtask package --zip        # Same, zipped for upload

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const BIN_NAME: &str = "astro-hop";
const MQ_JS_BUNDLE: &str =
    "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for ASTRO-HOP")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM for web deployment
    BuildWeb {
        /// Mark as dev build (adds DEV to the page title)
        #[arg(long)]
        dev: bool,
    },
    /// Build a native release for the host platform next to a copy of the assets
    Package {
        /// Also produce a zip of the package
        #[arg(long)]
        zip: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb { dev } => build_web(dev),
        Commands::Package { zip } => package(zip),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live inside the workspace")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Download a file from URL to destination
fn download_file(url: &str, dest: &Path) -> Result<()> {
    println!("Downloading {}...", url);
    run_cmd(Command::new("curl").args(["-L", "-o"]).arg(dest).arg(url))
}

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Remove and recreate an output folder
fn fresh_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir)?;
    }
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Build WASM for web deployment
fn build_web(dev: bool) -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown"]),
    )?;

    fresh_dir(&dist)?;

    println!("Copying files to dist/web...");
    let wasm = format!("{}.wasm", BIN_NAME);
    std::fs::copy(
        root.join("target/wasm32-unknown-unknown/release").join(&wasm),
        dist.join(&wasm),
    )
    .with_context(|| format!("missing {} (did the wasm build succeed?)", wasm))?;

    std::fs::copy(root.join("web/index.html"), dist.join("index.html"))?;

    let mq_js = dist.join("mq_js_bundle.js");
    if !mq_js.exists() {
        download_file(MQ_JS_BUNDLE, &mq_js)?;
    }

    copy_dir_recursive(&root.join("assets"), &dist.join("assets"))?;

    if dev {
        println!("Applying DEV build modifications...");
        let index_path = dist.join("index.html");
        let index = std::fs::read_to_string(&index_path)?;
        let index = index.replace("<title>ASTRO-HOP", "<title>[DEV] ASTRO-HOP");
        std::fs::write(&index_path, index)?;
    }

    println!("Web build complete: dist/web/");
    Ok(())
}

/// Platform the release is being built on (and for)
fn host_platform() -> &'static str {
    if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "macos") {
        "macos"
    } else {
        "linux"
    }
}

/// Executable name cargo produces on `platform`
fn binary_name(platform: &str) -> String {
    if platform == "windows" {
        format!("{}.exe", BIN_NAME)
    } else {
        BIN_NAME.to_string()
    }
}

/// Native release build with the assets folder alongside the binary.
/// Always builds for the host; cross builds need their own toolchain setup.
fn package(zip: bool) -> Result<()> {
    let root = project_root()?;
    let platform = host_platform();

    let dist = root.join(format!("dist/{}", platform));
    println!("Building native release for {}...", platform);
    fresh_dir(&dist)?;

    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release"]),
    )?;

    let binary_name = binary_name(platform);
    std::fs::copy(
        root.join("target/release").join(&binary_name),
        dist.join(&binary_name),
    )
    .with_context(|| format!("missing {} (did the release build succeed?)", binary_name))?;

    copy_dir_recursive(&root.join("assets"), &dist.join("assets"))?;

    if zip {
        let zip_name = format!("{}-{}.zip", BIN_NAME, platform);
        let zip_path = root.join("dist").join(&zip_name);
        if zip_path.exists() {
            std::fs::remove_file(&zip_path)?;
        }
        println!("Creating {}...", zip_name);
        run_cmd(
            Command::new("zip")
                .current_dir(&dist)
                .args(["-r", &format!("../{}", zip_name), "."]),
        )?;
    }

    println!("Package complete: dist/{}/", platform);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_name_matches_host_build() {
        let name = binary_name(host_platform());
        if cfg!(target_os = "windows") {
            assert_eq!(name, "astro-hop.exe");
        } else {
            assert_eq!(name, "astro-hop");
        }
    }

    #[test]
    fn test_cli_has_no_platform_override() {
        assert!(Cli::try_parse_from(["xtask", "package", "--zip"]).is_ok());
        assert!(Cli::try_parse_from(["xtask", "package", "--platform", "windows"]).is_err());
    }
}
