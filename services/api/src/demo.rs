use crate::infra::{default_vaults, InMemoryRemittanceRepository};
use clap::Args;
use std::sync::Arc;

use remit_ai::error::AppError;
use remit_ai::workflows::domain::UserId;
use remit_ai::workflows::emotion::EmotionEngine;
use remit_ai::workflows::remittance::{
    RemittanceRecordSubmission, RemittanceRequest, RemittanceService,
};
use remit_ai::workflows::vaults::{recommend, DiasporaLocation};

const SAMPLE_BIO: &str = "I remember my childhood back home and I miss my family deeply. \
    I am proud of what we have built. I hope my remittances bring a better future.";

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Bio text to score with the local keyword engine
    #[arg(long)]
    pub(crate) text: String,
    /// Diaspora location tag used for vault suggestions (US, UAE, UK,
    /// Canada, Australia; anything else falls back to the US defaults)
    #[arg(long, default_value = "US")]
    pub(crate) location: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Bio text for the analysis stage (defaults to a sample story)
    #[arg(long)]
    pub(crate) bio: Option<String>,
    /// Diaspora location tag for the recommendation stage
    #[arg(long, default_value = "US")]
    pub(crate) location: String,
    /// Transfer amount for the remittance stage
    #[arg(long, default_value_t = 12_000.0)]
    pub(crate) amount: f64,
    /// Transfer recipient for the remittance stage
    #[arg(long, default_value = "Amina in Sylhet")]
    pub(crate) recipient: String,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let location = DiasporaLocation::parse(&args.location);
    print_analysis(&args.text, location);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        bio,
        location,
        amount,
        recipient,
    } = args;

    let bio = bio.unwrap_or_else(|| SAMPLE_BIO.to_string());
    let location = DiasporaLocation::parse(&location);

    println!("Impact remittance demo");
    print_analysis(&bio, location);

    let history = Arc::new(InMemoryRemittanceRepository::default());
    let service = RemittanceService::new(history);

    println!("\nRemittance preparation");
    let request = RemittanceRequest {
        amount,
        recipient: recipient.clone(),
    };
    match service.prepare(&request) {
        Ok(receipt) => {
            println!("  amount:          {:.2}", receipt.amount);
            println!("  recipient:       {}", receipt.recipient);
            println!("  fraud risk:      {}", receipt.fraud_risk.label());
            println!("  public key:      {}", receipt.public_key);
            println!(
                "  sealed payload:  {}... ({} base64 chars, demo only, not decryptable)",
                &receipt.encrypted_data[..receipt.encrypted_data.len().min(32)],
                receipt.encrypted_data.len()
            );

            let user_id = UserId("demo-sender".to_string());
            for _ in 0..5 {
                service.record(
                    user_id.clone(),
                    RemittanceRecordSubmission {
                        amount,
                        recipient: recipient.clone(),
                        encrypted_data: receipt.encrypted_data.clone(),
                    },
                )?;
            }

            let summary = service.impact(&user_id)?;
            println!("\nImpact after {} recorded transfers", summary.remittance_count);
            println!("  avg allocation:  {:.0}%", summary.avg_allocation_percent);
            println!("  impact score:    {}/100", summary.impact_score);
        }
        Err(error) => println!("  rejected: {error}"),
    }

    Ok(())
}

fn print_analysis(bio: &str, location: DiasporaLocation) {
    let engine = EmotionEngine::new();
    let emotions = engine.analyze(bio);

    println!("\nEmotion analysis ({} chars)", bio.chars().count());
    for (category, score) in emotions.iter() {
        println!("  {:<10} {:.2}", category.label(), score);
    }
    let (dominant, score) = emotions.dominant();
    println!("  dominant:  {} ({score:.2})", dominant.label());

    let set = recommend(&emotions, location, &default_vaults());
    println!("\nRecommended vaults for {}", location.label());
    for entry in &set.ranked {
        println!(
            "  {:<16} {:.2}  {}",
            entry.vault.kind, entry.score, entry.vault.description
        );
    }
    if let Some(suggestion) = &set.suggestion {
        println!("  note: {suggestion}");
    }
}
