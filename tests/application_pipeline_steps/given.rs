//! Given steps for application pipeline BDD scenarios.

use super::world::{PipelineWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use talentboard::{
    access::{Actor, Capabilities, Capability},
    pipeline::{
        domain::{ApplicantSnapshot, Job, JobType, StackId, StackRef, UserId},
        ports::JobRepository,
        services::SubmitApplicationRequest,
    },
};

#[given("a job seeker has applied to a developer job")]
fn seeker_has_applied(world: &mut PipelineWorld) -> Result<(), eyre::Report> {
    let job = Job::new(
        "Backend Engineer",
        StackRef::new(StackId::new(), "Rust"),
        JobType::Developer,
    );
    run_async(world.jobs.store(&job)).wrap_err("store job for scenario")?;

    let seeker = Actor::job_seeker(UserId::new());
    let applicant = ApplicantSnapshot::new(seeker.id(), "Ada Lovelace", "ada@example.com");
    let application = run_async(
        world
            .service
            .submit_application(&seeker, SubmitApplicationRequest::new(job.id(), applicant)),
    )
    .wrap_err("submit application for scenario")?;

    world.applicant = Some(seeker);
    world.application = Some(application);
    Ok(())
}

#[given("a reviewer with all capabilities on the job's stack")]
fn reviewer_with_all_capabilities(world: &mut PipelineWorld) -> Result<(), eyre::Report> {
    let stack = world.application()?.stack_id();
    world.reviewer = Some(Actor::stack_admin(
        UserId::new(),
        [stack],
        Capabilities::all(),
    ));
    Ok(())
}

#[given(r#"a reviewer without the "{capability}" capability on the job's stack"#)]
fn reviewer_without_capability(
    world: &mut PipelineWorld,
    capability: String,
) -> Result<(), eyre::Report> {
    let withheld = Capability::try_from(capability.as_str())
        .map_err(|err| eyre::eyre!("invalid capability in scenario: {err}"))?;
    let stack = world.application()?.stack_id();
    world.reviewer = Some(Actor::stack_admin(
        UserId::new(),
        [stack],
        Capabilities::all().with(withheld, false),
    ));
    Ok(())
}
