use audio_event_filter::{Detection, EventFilter, FilterConfig, LabelExporter, Result};
use log::info;
use std::env;
use std::fs;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage:");
        println!("  {} filter <detections_json>", args[0]);
        println!("  {} labels [model_dir]", args[0]);
        return Ok(());
    }

    match args[1].as_str() {
        "filter" => {
            if args.len() < 3 {
                println!("Please provide a detections JSON file");
                return Ok(());
            }
            filter_detections(&args[2])?;
        }
        "labels" => {
            let model_dir = args.get(2).map(|s| s.as_str()).unwrap_or("./model");
            export_labels(model_dir)?;
        }
        _ => {
            println!("Invalid command. Use 'filter' or 'labels'");
        }
    }

    Ok(())
}

fn filter_detections(path: &str) -> Result<()> {
    info!("Filtering detections from: {}", path);

    let raw = fs::read_to_string(path)?;
    let events: Vec<Detection> = serde_json::from_str(&raw)?;
    info!("Loaded {} detections", events.len());

    let filter = EventFilter::new(FilterConfig::default());
    let stats = filter.config().stats();
    info!(
        "Blacklist filter enabled: {} ({} events)",
        stats.blacklist_enabled, stats.blacklist_count
    );
    info!(
        "Label merge enabled: {} ({} rules)",
        stats.label_merge_enabled, stats.label_merge_count
    );

    let results = filter.apply(&events);

    if results.is_empty() {
        println!("No events remaining after filtering");
        return Ok(());
    }

    println!("\n=== FILTERED EVENTS ===");
    for (i, event) in results.iter().enumerate() {
        println!("{:3}. {:<40} {:.3}", i + 1, event.label, event.score);
    }
    println!("\nKept {} of {} events", results.len(), events.len());

    Ok(())
}

fn export_labels(model_dir: &str) -> Result<()> {
    info!("Exporting label vocabulary from: {}", model_dir);

    let exporter = LabelExporter::new(model_dir);
    exporter.export()?;

    Ok(())
}
