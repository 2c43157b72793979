// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines the cleanup verbs, their flags and the daemon connection options.

use clap::{Args, Parser, Subcommand};
use klir::cleanup::{RemoveOptions, Verb};
use klir::runtime::{RuntimeConfig, RuntimeType};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "klir")]
#[command(about = "Clean up Docker and Podman containers and images with ease")]
#[command(version)]
pub struct Cli {
    /// Daemon address (unix:///path, a socket path, tcp://host:port or http://host:port)
    #[arg(short = 'H', long, env = "DOCKER_HOST", global = true)]
    pub host: Option<String>,

    /// Container runtime to use instead of auto-detection
    #[arg(long, value_enum, env = "KLIR_RUNTIME", global = true)]
    pub runtime: Option<RuntimeType>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every verb.
#[derive(Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stop running containers
    Stop {
        #[command(flatten)]
        common: CommonArgs,

        /// Seconds to wait for a container to stop before killing it
        #[arg(short = 't', long = "time", value_name = "SECONDS")]
        time: Option<u64>,
    },

    /// Remove stopped, paused or dead containers
    #[command(visible_alias = "rm")]
    RemoveContainers {
        #[command(flatten)]
        common: CommonArgs,

        /// Also offer running containers and force their removal
        #[arg(short, long)]
        force: bool,
    },

    /// Remove images no container uses
    #[command(visible_alias = "rmi")]
    RemoveImages {
        #[command(flatten)]
        common: CommonArgs,

        /// Also offer images in use and force their removal
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            runtime: self.runtime,
            host: self.host.clone().filter(|h| !h.trim().is_empty()),
        }
    }
}

impl Commands {
    pub fn verbose(&self) -> bool {
        match self {
            Commands::Stop { common, .. }
            | Commands::RemoveContainers { common, .. }
            | Commands::RemoveImages { common, .. } => common.verbose,
        }
    }

    pub fn verb(&self) -> Verb {
        match self {
            Commands::Stop { time, .. } => Verb::Stop {
                timeout: time.map(Duration::from_secs),
            },
            Commands::RemoveContainers { force, .. } => {
                Verb::RemoveContainers(RemoveOptions::from_force_flag(*force))
            }
            Commands::RemoveImages { force, .. } => {
                Verb::RemoveImages(RemoveOptions::from_force_flag(*force))
            }
        }
    }
}
