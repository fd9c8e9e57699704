use anyhow::{bail, Context};
use clap::Parser;
use dotenv::dotenv;
use tracing::info;

use lets_meet::{
    app::{gen_app, AppConfig},
    client::{
        midpoint_client::{MidpointClient, MidpointClientConfig},
        place_panel::PlaceDetail,
        session::{AddressSlot, Applied, Session, Suggestion},
    },
    config::{Cli, Command, FindConfig, ServeConfig},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    match Cli::parse().command {
        Command::Serve(config) => serve(config).await,
        Command::Find(config) => find(config).await,
    }
}

async fn serve(config: ServeConfig) -> anyhow::Result<()> {
    info!("Starting app...");

    let app = gen_app(AppConfig {
        maps_host: config.maps_host,
        maps_api_key: config.maps_api_key,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    info!("API server listening on {}", config.bind_address);

    axum::serve(listener, app)
        .await
        .context("Error spinning up the API server")
}

async fn find(config: FindConfig) -> anyhow::Result<()> {
    let client = MidpointClient::new(MidpointClientConfig {
        base_url: config.backend_url,
    });

    let mut session = Session::new();
    for (slot, place_id) in [
        (AddressSlot::First, config.place_id1),
        (AddressSlot::Second, config.place_id2),
    ] {
        if let Some(id) = place_id {
            session.select_suggestion(
                slot,
                &Suggestion {
                    id: Some(id),
                    display_name: None,
                },
            );
        }
    }
    session.edit_address(AddressSlot::First, &config.address1);
    session.edit_address(AddressSlot::Second, &config.address2);
    session.set_place_type(config.place_type);

    match session.submit(&client).await {
        Ok(Applied::Rendered) => {}
        Ok(_) | Err(_) => bail!(session
            .notice()
            .unwrap_or("Search failed")
            .to_string()),
    }

    print_scene(&session);

    if let Some(index) = config.open {
        match session.open_place(index) {
            Some(detail) => print_detail(detail),
            None => bail!("No result at position {}", index),
        }
    }

    Ok(())
}

fn print_scene(session: &Session) {
    let Some(scene) = session.scene() else {
        return;
    };

    println!("Markers:");
    for marker in &scene.markers {
        let style = marker.kind.style();
        println!(
            "  [{}] {} at {} ({})",
            style.glyph.unwrap_or('•'),
            marker.title,
            marker.position,
            style.background
        );
    }
    println!(
        "Viewport: {},{} to {},{}",
        scene.viewport.south, scene.viewport.west, scene.viewport.north, scene.viewport.east
    );

    if !scene.has_results() {
        println!("No places found near the midpoint.");
        return;
    }

    println!("Results:");
    for (index, entry) in scene.entries.iter().enumerate() {
        match &entry.rating {
            Some(rating) => println!("  {}. {}  {}", index, entry.title, rating),
            None => println!("  {}. {}", index, entry.title),
        }
    }
}

fn print_detail(detail: &PlaceDetail) {
    println!();
    println!("{}", detail.title);
    println!("  {}", detail.rating);
    println!("  {}", detail.address);
    for (who, travel, directions) in [
        ("You", &detail.travel_from_you, &detail.directions_from_you),
        ("Friend", &detail.travel_from_friend, &detail.directions_from_friend),
    ] {
        match &travel.distance {
            Some(distance) => println!("  {}: {} ({})", who, travel.time, distance),
            None => println!("  {}: {}", who, travel.time),
        }
        println!("    {}", directions);
    }
}
