mod nav;
mod setup;
mod views;

use dioxus::prelude::*;
use views::{About, Game, Home, Layout, NotFound};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/game")]
        Game {},
        #[route("/about")]
        About {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "《重启人生》" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[cfg(feature = "server")]
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = String::from("127.0.0.1"))]
    ip: String,
    /// 0 keeps the address handed over by the dioxus CLI
    #[arg(long, default_value_t = 0)]
    port: u16,
}

#[cfg(feature = "server")]
impl Args {
    fn listen_addr(&self) -> Result<std::net::SocketAddr, std::net::AddrParseError> {
        if self.port == 0 {
            return Ok(dioxus_cli_config::fullstack_address_or_localhost());
        }
        format!("{}:{}", self.ip, self.port).parse()
    }
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;
    use tokio::net::TcpListener;

    env_logger::init();

    let args = Args::parse();
    let addr = args.listen_addr()?;

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfigBuilder::default(), App)
        .into_make_service();

    let listener = TcpListener::bind(addr).await?;
    log::info!("Restart Life is available at http://{}", addr);

    axum::serve(listener, router).await?;
    log::info!("👋 Bye !");
    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}
