//! Command implementations

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use codedef_core::codes::CodeFamily;
use codedef_core::config::RegistryConfig;
use codedef_core::file_io::{load_settings, save_settings};
use codedef_core::registry::{CodeDescription, DesignCodeRegistry};
use codedef_core::settings::CodeSettings;

use crate::cli::{Cli, Commands, GlobalOpts, SettingsCommands};

#[derive(Debug, Serialize)]
struct FamilySummary {
    key: &'static str,
    name: &'static str,
    codes: usize,
    max_id: u16,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    family: CodeFamily,
    id: i64,
    valid: bool,
}

#[derive(Debug, Serialize)]
struct SettingsView<'a> {
    settings: &'a CodeSettings,
    resolved: Vec<CodeDescription>,
}

pub fn run(cli: &Cli) -> Result<ExitCode> {
    let global = &cli.global;
    match &cli.command {
        Commands::Families => families(global),
        Commands::List { family, all, full } => list(global, *family, *all, *full),
        Commands::Show { family, code } => show(global, *family, code),
        Commands::Check { family, id } => check(global, *family, *id),
        Commands::Settings(cmd) => settings(global, cmd),
    }
}

/// Build the registry from the config file plus any `--overrides` files.
///
/// Locale precedence is `--locale`/`CODEDEF_LOCALE`, then `fallback_locale`
/// (a settings file's display locale), then the config.
pub fn build_registry(global: &GlobalOpts, fallback_locale: Option<&str>) -> Result<DesignCodeRegistry> {
    let config = match &global.config {
        Some(path) => RegistryConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RegistryConfig::default(),
    };

    let locale = global
        .locale
        .clone()
        .or_else(|| fallback_locale.map(str::to_string));
    let mut config = config.with_locale(locale);
    config.override_files.extend(global.overrides.iter().cloned());

    DesignCodeRegistry::from_config(&config).context("failed to load locale overrides")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn families(global: &GlobalOpts) -> Result<ExitCode> {
    let summaries: Vec<FamilySummary> = CodeFamily::ALL
        .iter()
        .map(|family| FamilySummary {
            key: family.key(),
            name: family.display_name(),
            codes: family.variant_count(),
            max_id: family.max_id(),
        })
        .collect();

    if global.json {
        print_json(&summaries)?;
    } else {
        for summary in &summaries {
            println!("{:<28} {:<28} {:>4}", summary.key, summary.name, summary.codes);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn list(global: &GlobalOpts, family: CodeFamily, all: bool, full: bool) -> Result<ExitCode> {
    let registry = build_registry(global, None)?;

    if global.json {
        let descriptions = registry
            .list_variants(family, all)
            .into_iter()
            .map(|(id, _)| registry.describe(family, i64::from(id)))
            .collect::<Result<Vec<_>, _>>()?;
        print_json(&descriptions)?;
        return Ok(ExitCode::SUCCESS);
    }

    for (id, short) in registry.list_variants(family, all) {
        let name = if full {
            registry.full_name(family, i64::from(id))?
        } else {
            short
        };
        println!("{:>4}  {}", id, name);
    }
    Ok(ExitCode::SUCCESS)
}

fn show(global: &GlobalOpts, family: CodeFamily, code: &str) -> Result<ExitCode> {
    let registry = build_registry(global, None)?;
    let id = registry.resolve(family, code)?;
    let description = registry.describe(family, i64::from(id))?;

    if global.json {
        print_json(&description)?;
    } else {
        println!("Family:     {}", description.family);
        println!("Id:         {}", description.id);
        println!("Key:        {}", description.key);
        println!("Full name:  {}", description.full_name);
        println!("Short name: {}", description.short_name);
    }
    Ok(ExitCode::SUCCESS)
}

fn check(global: &GlobalOpts, family: CodeFamily, id: i64) -> Result<ExitCode> {
    let registry = build_registry(global, None)?;
    let valid = registry.is_valid(family, id);

    if global.json {
        print_json(&CheckResult { family, id, valid })?;
    } else if valid {
        println!("{} id {} is valid: {}", family, id, registry.short_name(family, id)?);
    } else {
        println!("{} id {} is not declared (valid ids: 0..={})", family, id, family.max_id());
    }

    Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn settings(global: &GlobalOpts, cmd: &SettingsCommands) -> Result<ExitCode> {
    match cmd {
        SettingsCommands::Init {
            file,
            force,
            display_locale,
            short,
        } => {
            if file.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", file.display());
            }
            let mut settings = CodeSettings::new();
            settings.display.locale = display_locale.clone();
            settings.display.prefer_short_names = *short;
            save(&settings, file)?;
            if !global.json {
                println!("Created {}", file.display());
            } else {
                print_json(&settings)?;
            }
        }
        SettingsCommands::Show { file } => {
            let settings = load(file)?;
            let registry = build_registry(global, settings.display.locale.as_deref())?;
            if global.json {
                print_json(&SettingsView {
                    settings: &settings,
                    resolved: settings.resolve(&registry)?,
                })?;
            } else if settings.selections.is_empty() {
                println!("No codes selected");
            } else {
                for family in settings.selections.keys() {
                    println!(
                        "{:<28} {}",
                        family.display_name(),
                        settings.display_name(&registry, *family)?
                    );
                }
            }
        }
        SettingsCommands::Set { file, family, code } => {
            let mut settings = load(file)?;
            let registry = build_registry(global, settings.display.locale.as_deref())?;
            let id = registry.resolve(*family, code)?;
            settings.select(*family, i64::from(id))?;
            save(&settings, file)?;
            tracing::info!(family = family.key(), id, "updated code selection");
            if global.json {
                print_json(&registry.describe(*family, i64::from(id))?)?;
            } else {
                println!("{}: {}", family.display_name(), registry.full_name(*family, i64::from(id))?);
            }
        }
        SettingsCommands::Clear { file, family } => {
            let mut settings = load(file)?;
            let removed = settings.clear(*family);
            save(&settings, file)?;
            if !global.json {
                match removed {
                    Some(id) => println!("Cleared {} (was id {})", family.display_name(), id),
                    None => println!("{} was not set", family.display_name()),
                }
            } else {
                print_json(&serde_json::json!({ "family": family, "removed": removed }))?;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn load(path: &Path) -> Result<CodeSettings> {
    load_settings(path).with_context(|| format!("failed to load settings from {}", path.display()))
}

fn save(settings: &CodeSettings, path: &Path) -> Result<()> {
    save_settings(settings, path).with_context(|| format!("failed to save settings to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use codedef_core::codes::SteelCode;
    use std::env::temp_dir;
    use std::fs;

    fn opts() -> GlobalOpts {
        GlobalOpts::default()
    }

    #[test]
    fn test_locale_precedence() {
        let registry = build_registry(&opts(), Some("ru")).unwrap();
        assert_eq!(registry.locale(), Some("ru"));

        let explicit = GlobalOpts {
            locale: Some("en".to_string()),
            ..opts()
        };
        let registry = build_registry(&explicit, Some("ru")).unwrap();
        assert_eq!(registry.locale(), Some("en"));

        let registry = build_registry(&opts(), None).unwrap();
        assert_eq!(registry.locale(), None);
    }

    #[test]
    fn test_config_and_override_files() {
        let dir = temp_dir().join("codedef_cli_test_config");
        fs::create_dir_all(&dir).unwrap();
        let config_path = dir.join("codedef.toml");
        let site_path = dir.join("site.toml");
        let extra_path = dir.join("extra.toml");
        fs::write(&config_path, "locale = \"de\"\noverride_files = [\"site.toml\"]\n").unwrap();
        fs::write(
            &site_path,
            "locale = \"de\"\n[[entry]]\nfamily = \"steel\"\nid = 4\nfull = \"Eurocode 3 (Standort)\"\n",
        )
        .unwrap();
        fs::write(
            &extra_path,
            "locale = \"de\"\n[[entry]]\nfamily = \"steel\"\nid = 4\nfull = \"Eurocode 3 (Extra)\"\n",
        )
        .unwrap();

        let global = GlobalOpts {
            config: Some(config_path.clone()),
            overrides: vec![extra_path.clone()],
            ..opts()
        };
        let registry = build_registry(&global, None).unwrap();
        assert_eq!(registry.locale(), Some("de"));
        assert_eq!(registry.full_name(CodeFamily::Steel, 4).unwrap(), "Eurocode 3 (Extra)");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_check_exit_codes() {
        assert_eq!(check(&opts(), CodeFamily::Steel, 2).unwrap(), ExitCode::SUCCESS);
        assert_eq!(check(&opts(), CodeFamily::Steel, 0).unwrap(), ExitCode::SUCCESS);
        assert_eq!(check(&opts(), CodeFamily::Steel, -1).unwrap(), ExitCode::FAILURE);
        assert_eq!(check(&opts(), CodeFamily::Steel, 88).unwrap(), ExitCode::FAILURE);
    }

    #[test]
    fn test_show_unknown_name_fails() {
        let err = show(&opts(), CodeFamily::Steel, "no such code").unwrap_err();
        assert!(err.downcast_ref::<codedef_core::CodeError>().is_some());
    }

    #[test]
    fn test_settings_workflow() {
        let path = temp_dir().join("codedef_cli_test_settings.json");
        let _ = fs::remove_file(&path);

        let init = SettingsCommands::Init {
            file: path.clone(),
            force: false,
            display_locale: None,
            short: false,
        };
        settings(&opts(), &init).unwrap();
        // second init without --force refuses to overwrite
        assert!(settings(&opts(), &init).is_err());

        let set = SettingsCommands::Set {
            file: path.clone(),
            family: CodeFamily::Steel,
            code: "AISC-LRFD93".to_string(),
        };
        settings(&opts(), &set).unwrap();
        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded.selected::<SteelCode>(), SteelCode::AiscLrfd93);

        let bad = SettingsCommands::Set {
            file: path.clone(),
            family: CodeFamily::Steel,
            code: "500".to_string(),
        };
        assert!(settings(&opts(), &bad).is_err());

        let clear = SettingsCommands::Clear {
            file: path.clone(),
            family: CodeFamily::Steel,
        };
        settings(&opts(), &clear).unwrap();
        assert!(load_settings(&path).unwrap().selections.is_empty());

        let _ = fs::remove_file(&path);
    }
}
