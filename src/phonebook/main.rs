use clap::Parser;
use directories::ProjectDirs;
use phonebook::api::{ConfigAction, PhonebookApi, PhonebookPaths};
use phonebook::config::PhonebookConfig;
use phonebook::error::{PhonebookError, Result};
use phonebook::model::{Field, RecordFields};
use phonebook::search::{Criteria, SearchOptions};
use phonebook::store::fs_backend::FsBackend;
use std::path::PathBuf;

mod args;
mod print;
use args::{flag_pair, Cli, Commands};
use print::{print_config, print_fields, print_messages, print_page, print_records};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

struct AppContext {
    api: PhonebookApi<FsBackend>,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { page }) => handle_list(&ctx, page),
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields.given()),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, id, fields.given()),
        Some(Commands::View { ids }) => handle_view(&ctx, &ids),
        Some(Commands::Search {
            id,
            fields,
            strict,
            loose,
            case_sensitive,
            ignore_case,
        }) => {
            let mut criteria: Criteria = fields.given().into_iter().collect();
            criteria.set(Field::Id, id);
            let config = ctx.api.config();
            let options = SearchOptions::new(
                flag_pair(strict, loose).unwrap_or(config.search_strict),
                flag_pair(case_sensitive, ignore_case).unwrap_or(config.search_case_sensitive),
            );
            handle_search(&mut ctx, &criteria, options)
        }
        Some(Commands::Fields) => {
            print_fields(ctx.api.fields());
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, 1),
    }
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(home) = &cli.home {
        return Ok(home.clone());
    }
    ProjectDirs::from("com", "phonebook", "phonebook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PhonebookError::Config("Could not determine data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir(cli)?;
    log::debug!("Using data directory {}", data_dir.display());

    let config = PhonebookConfig::load_or_create(&data_dir)?;
    let backend = FsBackend::in_dir(&data_dir);
    let api = PhonebookApi::open(backend, config, PhonebookPaths::new(data_dir))?;
    log::debug!("Phonebook file {}", api.location().display());

    Ok(AppContext { api })
}

fn handle_list(ctx: &AppContext, page: usize) -> Result<()> {
    let result = ctx.api.list_page(page)?;
    if let Some(page) = &result.page {
        print_page(&result.listed_records, page, ctx.api.config().column_width);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, given: Vec<(Field, String)>) -> Result<()> {
    let mut fields = RecordFields::new();
    for (field, value) in given {
        fields.set(field, value);
    }
    let result = ctx.api.add_record(fields)?;
    print_records(&result.affected_records, ctx.api.config().column_width);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: usize, changes: Vec<(Field, String)>) -> Result<()> {
    let result = ctx.api.patch_record(id, &changes)?;
    print_records(&result.affected_records, ctx.api.config().column_width);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: &[usize]) -> Result<()> {
    let result = ctx.api.view_records(ids)?;
    print_records(&result.listed_records, ctx.api.config().column_width);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, criteria: &Criteria, options: SearchOptions) -> Result<()> {
    let result = ctx.api.search_records(criteria, Some(options))?;
    if !result.listed_records.is_empty() {
        print_records(&result.listed_records, ctx.api.config().column_width);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = ctx.api.config_action(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
