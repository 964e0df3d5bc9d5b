use crate::{
    backend::{ProcessReply, WorkflowBackend},
    error::{Error, Result},
    link::DocLink,
};
use tracing::info;

/// Outcome of one accepted submission.
#[derive(Debug)]
pub struct Submission {
    pub link: DocLink,
    pub reply: ProcessReply,
}

/// Pull the first document link out of the input text. Performs no I/O.
///
/// # Errors
///
/// Returns `Error::InvalidLink` when the input contains no recognizable
/// link.
pub fn validate_input(input: &str) -> Result<DocLink> {
    let Some(link) = DocLink::extract(input) else {
        info!(input_len = input.len(), "input carries no document link");
        return Err(Error::InvalidLink);
    };
    Ok(link)
}

/// Hand a validated link to the backend.
///
/// # Errors
///
/// Whatever the backend call returns.
pub async fn submit_link<B>(backend: &B, link: &DocLink) -> Result<ProcessReply>
where
    B: WorkflowBackend + ?Sized,
{
    info!(link = %link, kind = %link.kind(), "submitting document link");
    backend.process(link).await
}

/// Run one submission end to end: validate, then submit. The backend is
/// not contacted when validation fails.
///
/// # Errors
///
/// - `Error::InvalidLink` when the input contains no recognizable link.
/// - Whatever the backend call returns otherwise.
pub async fn submit_input<B>(backend: &B, input: &str) -> Result<Submission>
where
    B: WorkflowBackend + ?Sized,
{
    let link = validate_input(input)?;
    let reply = submit_link(backend, &link).await?;
    Ok(Submission { link, reply })
}
