use crate::reports;
use clap::Args;
use freqcrack::error::CrackResult;
use freqcrack::pipeline::Pipeline;

#[derive(Args, Debug, Clone, Default)]
pub struct DecodeArgs {
    /// Print every substitution (cipher letter, rank, decoded letter)
    #[arg(long, default_value_t = false)]
    pub trace: bool,
}

pub fn run(args: DecodeArgs, pipeline: &Pipeline) -> CrackResult<()> {
    let prepared = pipeline.prepare()?;

    reports::print_cipher_ranking(&prepared.cipher);
    reports::print_reference_ranking(&prepared.reference);
    reports::print_correspondence(&pipeline.decoder(&prepared).correspondence());

    if args.trace {
        println!("\n🔓 === DECODING === 🔓");
    }
    let plaintext = pipeline.decode_with(&prepared, |sub| {
        if args.trace {
            reports::print_substitution(sub);
        }
    })?;

    println!(
        "\n📝 Decoded {} chars into '{}'",
        plaintext.chars().count(),
        pipeline.config().paths.output.display()
    );
    Ok(())
}
