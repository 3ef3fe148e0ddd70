//! Show command implementation

use std::path::Path;

use colored::Colorize;
use jspm_fs::NormalizedPath;
use jspm_manifest::{DependencyMap, ManifestConfig, Settings};
use serde_json::{Map, Value, json};

use crate::error::Result;

/// Run the show command
pub fn run_show(manifest: &Path, settings: &Settings, json: bool) -> Result<()> {
    let config = ManifestConfig::load(manifest, settings)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&to_json(&config))?);
        return Ok(());
    }

    println!("{}", "jspm Configuration".bold());
    println!();
    println!("{}:   {}", "Manifest".dimmed(), config.file_name());
    println!("{}:     {}", "Layout".dimmed(), layout_label(&config).cyan());
    println!("{}:   {}", "Registry".dimmed(), config.registry().cyan());
    if let Some(name) = &config.name {
        println!("{}:       {}", "Name".dimmed(), name.cyan());
    }
    println!();

    println!("{}:", "Directories".bold());
    println!("  {}:  {}", "baseURL".dimmed(), dir(&config, &config.base_url));
    println!("  {}: {}", "packages".dimmed(), dir(&config, &config.packages));
    if let Some(lib) = &config.lib {
        println!("  {}:      {}", "lib".dimmed(), dir(&config, lib));
    }
    if let Some(dist) = &config.dist {
        println!("  {}:     {}", "dist".dimmed(), dir(&config, dist));
    }
    if let Some(config_file) = config.config_file() {
        println!("  {}:   {}", "config".dimmed(), dir(&config, config_file));
    }
    println!();

    print_group("Dependencies", &config.dependencies);
    print_group("Dev Dependencies", &config.dev_dependencies);
    print_group("Peer Dependencies", &config.peer_dependencies);

    if !config.overrides.is_empty() {
        println!("{}:", "Overrides".bold());
        for name in config.overrides.keys() {
            println!("  {} {}", "*".blue(), name.cyan());
        }
        println!();
    }

    if !config.warnings().is_empty() {
        println!("{}:", "Warnings".bold());
        for warning in config.warnings() {
            println!("  {} {}", "!".yellow(), warning);
        }
    }

    Ok(())
}

fn layout_label(config: &ManifestConfig) -> &'static str {
    match (config.namespace_aware(), config.uses_namespace()) {
        (false, _) => "not configured for jspm",
        (true, true) => "nested under \"jspm\"",
        (true, false) => "top level",
    }
}

/// Directory relative to the manifest, `.` for the manifest directory itself.
fn dir(config: &ManifestConfig, path: &NormalizedPath) -> String {
    let relative = config.relative(path);
    if relative.is_empty() {
        ".".to_string()
    } else {
        relative
    }
}

fn print_group(title: &str, deps: &DependencyMap) {
    println!("{}:", title.bold());
    let mut any = false;
    for (name, dep) in deps.iter().filter_map(|(name, dep)| Some((name, dep.as_ref()?))) {
        println!("  {} {} {}", "+".green(), name.cyan(), dep.exact_name().dimmed());
        any = true;
    }
    if !any {
        println!("  {}", "None".dimmed());
    }
    println!();
}

fn group_json(deps: &DependencyMap) -> Value {
    let map: Map<String, Value> = deps
        .iter()
        .filter_map(|(name, dep)| Some((name.clone(), Value::String(dep.as_ref()?.exact_name()))))
        .collect();
    Value::Object(map)
}

fn to_json(config: &ManifestConfig) -> Value {
    let optional_dir = |path: &Option<NormalizedPath>| match path {
        Some(path) => Value::String(dir(config, path)),
        None => Value::Null,
    };

    let config_files: Map<String, Value> = config
        .config_files
        .iter()
        .map(|(key, path)| (key.clone(), Value::String(dir(config, path))))
        .collect();

    json!({
        "manifest": config.file_name().as_str(),
        "namespaceAware": config.namespace_aware(),
        "usesNamespace": config.uses_namespace(),
        "registry": config.registry(),
        "name": config.name,
        "directories": {
            "baseURL": dir(config, &config.base_url),
            "packages": dir(config, &config.packages),
            "lib": optional_dir(&config.lib),
            "dist": optional_dir(&config.dist),
        },
        "configFiles": config_files,
        "dependencies": group_json(&config.dependencies),
        "devDependencies": group_json(&config.dev_dependencies),
        "peerDependencies": group_json(&config.peer_dependencies),
        "overrides": config.overrides,
        "warnings": config.warnings().iter().map(ToString::to_string).collect::<Vec<_>>(),
    })
}
