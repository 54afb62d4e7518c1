//! CLI subcommands
//!
//! Each command drives the same core components the web UI uses, with the
//! terminal standing in for the views.

use anyhow::bail;
use portal_core::options::DropdownRow;
use portal_core::{
    read_confirmation, CandidatesApi, Field, FormState, KeyValueStore, OptionsLoader,
    SubmissionOrchestrator, FORM_DATA_KEY,
};
use std::cell::Cell;
use std::io::Write;
use std::net::SocketAddr;
use tracing::info;

use crate::adapters::file_store::FileStore;
use crate::adapters::http_client::HttpCandidatesApi;
use crate::cli::{Command, SubmitArgs};
use crate::config::Settings;

pub async fn run(command: &Command, settings: &Settings) -> anyhow::Result<()> {
    let api = HttpCandidatesApi::from_settings(&settings.api);
    let store = FileStore::new(&settings.storage.path);
    let mut out = std::io::stdout();

    match command {
        Command::Serve => serve(settings).await,
        Command::Levels => levels(&api, &mut out).await,
        Command::Submit(args) => submit(&api, &store, args, &mut out).await,
        Command::Show => show(&store, &mut out),
        Command::Clear => clear(&store, &mut out),
    }
}

pub async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let app = crate::create_app(settings);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Open the level selector once and print its rows.
pub async fn levels<A, W>(api: &A, out: &mut W) -> anyhow::Result<()>
where
    A: CandidatesApi + ?Sized,
    W: Write,
{
    let mut loader = OptionsLoader::new();
    for row in loader.open(api).await.rows() {
        match row {
            DropdownRow::Option(option) => writeln!(out, "{}", option.label)?,
            DropdownRow::Error(message) => writeln!(out, "! {}", message)?,
            DropdownRow::Spinner => writeln!(out, "...")?,
        }
    }
    Ok(())
}

/// Fill the form from `args`, then submit it if the submit control would be enabled.
pub async fn submit<A, S, W>(api: &A, store: &S, args: &SubmitArgs, out: &mut W) -> anyhow::Result<()>
where
    A: CandidatesApi + ?Sized,
    S: KeyValueStore + ?Sized,
    W: Write,
{
    let mut form = FormState::new();
    form.set(Field::Name, &args.name);
    form.set(Field::Email, &args.email);
    form.set(Field::Description, &args.description);
    form.set(Field::RepoUrl, &args.repo_url);
    form.set(Field::Level, &args.level);

    let Some(values) = form.begin_submit() else {
        for (field, message) in form.errors().iter() {
            writeln!(out, "{}: {}", field, message)?;
        }
        bail!("the form has invalid fields");
    };

    let navigated = Cell::new(false);
    let navigator = || navigated.set(true);
    let outcome = SubmissionOrchestrator::new(api, store, &navigator)
        .submit(&values)
        .await;
    form.finish_submit(&outcome);

    if !form.submit_errors().is_empty() {
        for message in form.submit_errors() {
            writeln!(out, "{}", message)?;
        }
        bail!("the submission was rejected");
    }

    if navigated.get() {
        show(store, out)?;
    }
    Ok(())
}

/// Render the confirmation view.
pub fn show<S, W>(store: &S, out: &mut W) -> anyhow::Result<()>
where
    S: KeyValueStore + ?Sized,
    W: Write,
{
    writeln!(out, "{}", read_confirmation(store))?;
    Ok(())
}

pub fn clear<S, W>(store: &S, out: &mut W) -> anyhow::Result<()>
where
    S: KeyValueStore + ?Sized,
    W: Write,
{
    store.remove(FORM_DATA_KEY)?;
    writeln!(out, "Submitted data cleared")?;
    Ok(())
}
