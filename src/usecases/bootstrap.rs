use std::{path::Path, sync::mpsc};

use crate::{
    domain::{
        assistant_state::AssistantState,
        responder::{ResponseRule, RuleBook},
        shell_state::ShellState,
        tips_state::{TipLink, TipsState},
        topics::TopicCatalog,
    },
    infra::{
        self,
        config::{AppConfig, FileConfigAdapter},
        content_loader::BackgroundContentLoader,
        content_store::FsContentStore,
        contracts::ConfigAdapter,
        error::AppError,
        logging::LoggingGuard,
        storage_layout::StorageLayout,
    },
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        shell::DefaultShellOrchestrator,
    },
};

pub struct ComposedShell {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

pub fn bootstrap(config_path: Option<&Path>) -> anyhow::Result<(AppContext, LoggingGuard)> {
    let context = build_context(&FileConfigAdapter::new(config_path))?;
    context.layout.ensure_dirs()?;
    let guard = infra::logging::init(&context.config.logging, &context.layout.log_dir)?;

    tracing::info!(
        topics = context.catalog.len(),
        rules = context.rules.len(),
        content_dir = %context.config.content.base_dir,
        "context bootstrapped"
    );

    Ok((context, guard))
}

fn build_context(config_adapter: &dyn ConfigAdapter) -> anyhow::Result<AppContext> {
    let config = config_adapter.load()?;
    let catalog = build_catalog(&config)?;
    let rules = build_rules(&config)?;
    let layout = StorageLayout::resolve()?;

    Ok(AppContext::new(config, catalog, rules, layout))
}

fn build_catalog(config: &AppConfig) -> Result<TopicCatalog, AppError> {
    match &config.catalog.topics {
        Some(topics) => Ok(TopicCatalog::new(topics.iter().cloned())?),
        None => Ok(TopicCatalog::default()),
    }
}

fn build_rules(config: &AppConfig) -> Result<RuleBook, AppError> {
    match &config.assistant.rules {
        Some(rules) => {
            let rules = rules
                .iter()
                .map(|rule| ResponseRule::new(&rule.keywords, rule.response.clone()))
                .collect();
            Ok(RuleBook::new(rules)?)
        }
        None => Ok(RuleBook::default()),
    }
}

pub fn initial_shell_state(config: &AppConfig) -> ShellState {
    let tips = TipsState::new(config.tips.iter().map(TipLink::from).collect());
    let assistant = AssistantState::new(
        config.assistant.collapsible,
        config.assistant.greeting.clone(),
    );
    ShellState::new(tips, assistant)
}

pub fn compose_shell(context: &AppContext) -> Result<ComposedShell, AppError> {
    let (events_tx, events_rx) = mpsc::channel();
    let store = FsContentStore::new(&context.config.content.base_dir);
    tracing::debug!(content_dir = %store.base_dir().display(), "content store ready");
    let loader = BackgroundContentLoader::new(store, events_tx)?;

    let orchestrator = DefaultShellOrchestrator::new(
        initial_shell_state(&context.config),
        context.catalog.clone(),
        context.rules.clone(),
        loader,
    );

    Ok(ComposedShell {
        event_source: Box::new(CrosstermEventSource::new(events_rx)),
        orchestrator: Box::new(orchestrator),
    })
}
