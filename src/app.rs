use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain::{self, responder::respond},
    infra, ui,
    usecases::{self, bootstrap, context::AppContext, search_topics::search_topics},
};

pub fn run(cli: Cli) -> Result<()> {
    let (context, _logging) = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Run => {
            let mut shell = bootstrap::compose_shell(&context)?;
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
        Command::Ask { words } => {
            println!("{}", answer_question(&context, &words.join(" ")));
        }
        Command::Search { query } => {
            for topic in search_results(&context, &query) {
                println!("{topic}");
            }
        }
    }

    Ok(())
}

fn answer_question<'a>(context: &'a AppContext, question: &str) -> &'a str {
    let answer = respond(question, &context.rules);
    tracing::info!(question_len = question.len(), "answered headless question");
    answer
}

fn search_results(context: &AppContext, query: &str) -> Vec<String> {
    let matches = search_topics(query, &context.catalog);
    tracing::info!(matches = matches.len(), "headless topic search finished");
    matches
}
