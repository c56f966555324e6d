mod access_log;
mod response;
mod server;

fn main() -> anyhow::Result<()> {
    server::main()
}
