mod nav;
mod views;

use dioxus::prelude::*;
use views::{About, Home, Navbar, Services, Unmatched};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/services")]
        Services {},
        #[route("/:..segments")]
        Unmatched { segments: Vec<String> },
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[cfg(feature = "server")]
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on, defaults to the one given by the dioxus CLI
    #[arg(long)]
    addr: Option<std::net::SocketAddr>,
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;
    use tokio::net::TcpListener;

    env_logger::init();

    let args = Args::parse();
    let addr = args
        .addr
        .unwrap_or_else(dioxus_cli_config::fullstack_address_or_localhost);

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfigBuilder::new(), App)
        .into_make_service();

    let listener = TcpListener::bind(addr).await?;
    log::info!("Serving topbar at http://{}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}
