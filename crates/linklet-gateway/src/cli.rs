use clap::Parser;
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "LINKLET_LISTEN_ADDR";
pub const CODE_LENGTH_ENV: &str = "LINKLET_CODE_LENGTH";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_CODE_LENGTH: &str = "7";

#[derive(Debug, Parser)]
#[command(name = "linklet-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = CODE_LENGTH_ENV,
        default_value = DEFAULT_CODE_LENGTH,
        value_parser = clap::value_parser!(u64).range(1..=32)
    )]
    pub code_length: u64,
}
