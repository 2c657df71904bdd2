use clap::Parser;
use skillgap::domain::model::{JobPosting, LearningResource, SkillGap, UserProfile};
use skillgap::domain::sample::TARGET_ROLES;
use skillgap::utils::error::ErrorSeverity;
use skillgap::utils::logger;
use skillgap::{
    AnalysisSession, Catalogs, CliConfig, Command, HttpAdvisoryClient, LocalStorage, TomlConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.logging.json {
        logger::init_json_logger(config.logging.verbose);
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = run(&cli.command, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(command: &Command, config: &TomlConfig) -> skillgap::Result<()> {
    let storage = LocalStorage::new(config.catalog_base_path());
    let catalogs = Catalogs::load(&storage, config).await?;

    match command {
        Command::Profile => print_profile(&catalogs.profile),
        Command::Roles => {
            for role in TARGET_ROLES {
                println!("{}", role);
            }
        }
        Command::Jobs { .. } => {
            let query = config.job_query();
            let jobs = query.run(&catalogs.jobs);
            println!(
                "Job matches (location: {}, minimum match: {}%): {}",
                query.location(),
                query.min_match_score(),
                jobs.len()
            );
            jobs.iter().for_each(print_job);
        }
        Command::Resources { .. } => {
            let query = config.resource_query()?;
            let resources = query.run(&catalogs.resources);
            println!(
                "Learning resources (difficulty: {}, duration: {}): {}",
                query.difficulty(),
                query.duration(),
                resources.len()
            );
            resources.iter().for_each(print_resource);
        }
        Command::Analyze { role } => {
            let client = HttpAdvisoryClient::from_config(config);
            let session = AnalysisSession::new(client, catalogs.profile);
            if let Some(role) = role {
                session.set_target_role(role.clone());
            }

            println!("Analyzing skill gap for {}...", session.target_role());
            let gap = session.analyze().await?;
            print_gap(&gap);
        }
    }

    Ok(())
}

fn bar(level: u8) -> String {
    "█".repeat(usize::from(level / 5))
}

fn print_profile(profile: &UserProfile) {
    println!("{} ({})", profile.name, profile.current_role);
    println!("Target role: {}", profile.effective_target_role());

    println!("\nSkills:");
    for (name, proficiency) in profile.proficiency_chart() {
        println!("  {:<20} {:>3}% {}", name, proficiency, bar(proficiency));
    }

    println!("\nCompleted courses:");
    for course in &profile.learning_progress.completed_courses {
        println!("  ✓ {}", course);
    }
    println!("\nIn progress:");
    for course in &profile.learning_progress.in_progress_courses {
        println!("  ◷ {}", course);
    }
}

fn print_job(job: &JobPosting) {
    println!("\n{} | {} | {}", job.title, job.company, job.location);
    println!("  Match: {}%", job.match_score);
    println!("  Skills: {}", job.required_skills.join(", "));
    println!("  {}", job.description);
}

fn print_resource(resource: &LearningResource) {
    println!("\n{} ({})", resource.title, resource.provider);
    println!("  {} | {}", resource.difficulty, resource.duration);
    println!("  Covers: {}", resource.skills_covered.join(", "));
    println!("  {}", resource.url);
}

fn print_gap(gap: &SkillGap) {
    println!("\nMissing skills:");
    for skill in &gap.missing_skills {
        println!("  - {}", skill);
    }

    println!("\nSkills to improve:");
    for partial in &gap.partial_skills {
        println!(
            "  {:<20} current {}% / required {}% ({:.0}% there)",
            partial.name,
            partial.current_level,
            partial.required_level,
            partial.progress_percent()
        );
    }

    println!("\nRecommended learning:");
    gap.recommendations.iter().for_each(print_resource);
}
