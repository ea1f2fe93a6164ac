use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use foliogen::models::ResumeRecord;
use foliogen::pipeline::record_key;
use foliogen::{Config, LlmProvider, OpenRouterProvider, PipelineConfig, PortfolioPipeline, Storage};

#[derive(Parser, Debug)]
#[command(name = "foliogen")]
#[command(version = "0.1.0")]
#[command(about = "Turn a plain-text resume into structured portfolio data")]
struct Args {
    /// Resume text file(s) to convert
    #[arg(required_unless_present = "cached")]
    inputs: Vec<PathBuf>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Enhance the extracted record with an LLM (requires OPENROUTER_API_KEY)
    #[arg(long)]
    enhance: bool,

    /// Database path for storing records
    #[arg(long, default_value = "foliogen.db")]
    database: String,

    /// Storage key (defaults to the input file stem; single input only)
    #[arg(long)]
    key: Option<String>,

    /// Serve the stored record instead of re-extracting
    #[arg(long)]
    cached: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("foliogen=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env();

    let storage = Storage::new(&args.database)?;

    // Serve a previously stored record without touching the input
    if args.cached {
        let key = match (&args.key, args.inputs.first()) {
            (Some(key), _) => key.clone(),
            (None, Some(path)) => record_key(path),
            (None, None) => anyhow::bail!("--cached needs --key or an input file to derive it"),
        };

        let stored = storage
            .get_record(&key)?
            .ok_or(foliogen::Error::RecordNotFound(key))?;
        tracing::info!("Using record stored at {}", stored.saved_at);
        output_record(&stored.record, &args)?;
        return Ok(());
    }

    let llm: Option<Arc<dyn LlmProvider>> = if args.enhance {
        let api_key = config.openrouter_api_key.clone().ok_or(foliogen::Error::Config(
            "OPENROUTER_API_KEY environment variable not set".to_string(),
        ))?;
        Some(Arc::new(OpenRouterProvider::new(
            api_key,
            config.openrouter_api_base.clone(),
            config.openrouter_model.clone(),
        )))
    } else {
        None
    };

    let pipeline_config = PipelineConfig {
        enhance: args.enhance,
        concurrency_limit: config.concurrency_limit,
    };
    let pipeline = PortfolioPipeline::new(llm, storage, pipeline_config);

    if args.inputs.len() > 1 {
        if args.key.is_some() {
            anyhow::bail!("--key only applies to a single input file");
        }

        let results = pipeline.process_files(&args.inputs).await?;
        for (key, result) in &results {
            match result {
                Ok(_) => tracing::info!("{}: converted", key),
                Err(e) => tracing::warn!("{}: {}", key, e),
            }
        }

        let converted = results.iter().filter(|(_, result)| result.is_ok()).count();
        println!(
            "Converted {}/{} resumes into {}",
            converted,
            results.len(),
            args.database
        );
        return Ok(());
    }

    let Some(input) = args.inputs.first() else {
        anyhow::bail!("no input file given");
    };

    let record = pipeline.process_file(input, args.key.as_deref()).await?;
    output_record(&record, &args)?;

    Ok(())
}

fn output_record(record: &ResumeRecord, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(record)?,
        "markdown" => format_markdown(record),
        _ => format_text(record),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(record: &ResumeRecord) -> String {
    let mut output = String::new();
    let personal = &record.personal;

    let name = if personal.name.is_empty() {
        "Unnamed"
    } else {
        &personal.name
    };
    output.push_str(&format!("\n=== Portfolio Data: {} ===\n\n", name));

    if !personal.title.is_empty() {
        output.push_str(&format!("Title: {}\n", personal.title));
    }
    if !personal.location.is_empty() {
        output.push_str(&format!("Location: {}\n", personal.location));
    }
    if !personal.email.is_empty() {
        output.push_str(&format!("Email: {}\n", personal.email));
    }
    if !personal.phone.is_empty() {
        output.push_str(&format!("Phone: {}\n", personal.phone));
    }
    if let Some(ref linkedin) = personal.social_links.linkedin {
        output.push_str(&format!("LinkedIn: {}\n", linkedin));
    }
    if !personal.summary.is_empty() {
        output.push_str(&format!("\n{}\n", personal.summary));
    }

    if !record.experience.is_empty() {
        output.push_str("\nExperience:\n");
        for entry in &record.experience {
            output.push_str(&format!("  - {}", entry.title));
            if !entry.company.is_empty() {
                output.push_str(&format!(" @ {}", entry.company));
            }
            if !entry.start_date.is_empty() {
                output.push_str(&format!(" ({} - {})", entry.start_date, entry.end_date));
            }
            output.push('\n');
            if !entry.description.is_empty() {
                output.push_str(&format!("    {}\n", entry.description));
            }
        }
    }

    if !record.education.is_empty() {
        output.push_str("\nEducation:\n");
        for entry in &record.education {
            output.push_str(&format!("  - {}", entry.degree));
            if !entry.institution.is_empty() {
                output.push_str(&format!(", {}", entry.institution));
            }
            if !entry.start_date.is_empty() {
                output.push_str(&format!(" ({} - {})", entry.start_date, entry.end_date));
            }
            output.push('\n');
        }
    }

    if !record.projects.is_empty() {
        output.push_str("\nProjects:\n");
        for project in &record.projects {
            output.push_str(&format!("  - {}", project.name));
            if !project.technologies.is_empty() {
                output.push_str(&format!(" [{}]", project.technologies));
            }
            output.push('\n');
            if !project.description.is_empty() {
                output.push_str(&format!("    {}\n", project.description));
            }
            if let Some(ref link) = project.link {
                output.push_str(&format!("    {}\n", link));
            }
        }
    }

    if !record.skills.is_empty() {
        output.push_str("\nSkills:\n");
        for group in &record.skills {
            output.push_str(&format!("  {}: {}\n", group.category, group.items.join(", ")));
        }
    }

    if !record.certifications.is_empty() {
        output.push_str("\nCertifications:\n");
        for cert in &record.certifications {
            match &cert.description {
                Some(description) => {
                    output.push_str(&format!("  - {}: {}\n", cert.name, description))
                }
                None => output.push_str(&format!("  - {}\n", cert.name)),
            }
        }
    }

    output
}

fn format_markdown(record: &ResumeRecord) -> String {
    let mut output = String::new();
    let personal = &record.personal;

    let name = if personal.name.is_empty() {
        "Portfolio"
    } else {
        &personal.name
    };
    output.push_str(&format!("# {}\n\n", name));

    if !personal.title.is_empty() {
        output.push_str(&format!("**{}**\n\n", personal.title));
    }

    let mut contact = Vec::new();
    if !personal.location.is_empty() {
        contact.push(personal.location.clone());
    }
    if !personal.email.is_empty() {
        contact.push(personal.email.clone());
    }
    if !personal.phone.is_empty() {
        contact.push(personal.phone.clone());
    }
    if let Some(ref linkedin) = personal.social_links.linkedin {
        contact.push(linkedin.clone());
    }
    if !contact.is_empty() {
        output.push_str(&format!("{}\n\n", contact.join(" · ")));
    }

    if !personal.summary.is_empty() {
        output.push_str(&format!("> {}\n\n", personal.summary));
    }

    if !record.experience.is_empty() {
        output.push_str("## Experience\n\n");
        for entry in &record.experience {
            output.push_str(&format!("### {}", entry.title));
            if !entry.company.is_empty() {
                output.push_str(&format!(" — {}", entry.company));
            }
            output.push('\n');
            if !entry.start_date.is_empty() {
                output.push_str(&format!("*{} – {}*\n", entry.start_date, entry.end_date));
            }
            if !entry.description.is_empty() {
                output.push_str(&format!("\n{}\n", entry.description));
            }
            output.push('\n');
        }
    }

    if !record.education.is_empty() {
        output.push_str("## Education\n\n");
        for entry in &record.education {
            output.push_str(&format!("- **{}**", entry.degree));
            if !entry.institution.is_empty() {
                output.push_str(&format!(", {}", entry.institution));
            }
            if !entry.start_date.is_empty() {
                output.push_str(&format!(" ({} – {})", entry.start_date, entry.end_date));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    if !record.projects.is_empty() {
        output.push_str("## Projects\n\n");
        for project in &record.projects {
            match &project.link {
                Some(link) => output.push_str(&format!("### [{}]({})\n", project.name, link)),
                None => output.push_str(&format!("### {}\n", project.name)),
            }
            if !project.technologies.is_empty() {
                output.push_str(&format!("`{}`\n", project.technologies));
            }
            if !project.description.is_empty() {
                output.push_str(&format!("\n{}\n", project.description));
            }
            output.push('\n');
        }
    }

    if !record.skills.is_empty() {
        output.push_str("## Skills\n\n");
        output.push_str("| Category | Skills |\n|----------|--------|\n");
        for group in &record.skills {
            output.push_str(&format!("| {} | {} |\n", group.category, group.items.join(", ")));
        }
        output.push('\n');
    }

    if !record.certifications.is_empty() {
        output.push_str("## Certifications\n\n");
        for cert in &record.certifications {
            match &cert.description {
                Some(description) => {
                    output.push_str(&format!("- **{}** — {}\n", cert.name, description))
                }
                None => output.push_str(&format!("- **{}**\n", cert.name)),
            }
        }
    }

    output
}
