//! raypick - cast a picking ray into a scene and list the entities it hits

use raypick::config::AppConfig;
use raypick::EntityInspector;
use raypick_core::Scene;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG still takes precedence over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting raypick");

    let scene = Scene::load(&config.scene.path)?;
    let world = scene.instantiate();
    log::info!("Loaded scene '{}' with {} entities", scene.name, world.entity_count());

    let ray = config.ray.to_ray();
    let mut inspector = EntityInspector::new(config.picking.to_query_config());
    inspector.set_selection_ray(&world, ray)?;

    for (id, position) in inspector.rows() {
        println!("{id}\t{position}");
    }
    if let Some(current) = inspector.current() {
        log::info!("Inspecting {} at {}", current.id, current.position_label());
    }

    Ok(())
}
