use crate::reports;
use clap::Args;
use freqcrack::error::CrackResult;
use freqcrack::pipeline::Pipeline;

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Only list the first N ranks
    #[arg(long)]
    pub top: Option<usize>,
}

pub fn run(args: AnalyzeArgs, pipeline: &Pipeline) -> CrackResult<()> {
    let prepared = pipeline.prepare()?;

    let mut cipher = prepared.cipher.clone();
    if let (Some(n), Some(freqs)) = (args.top, cipher.frequencies.as_mut()) {
        freqs.rows.truncate(n);
    }

    println!("\n🔎 === FREQUENCY AUDIT === 🔎");
    reports::print_cipher_ranking(&cipher);
    reports::print_reference_ranking(&prepared.reference);
    reports::print_correspondence(&pipeline.decoder(&prepared).correspondence());
    Ok(())
}
