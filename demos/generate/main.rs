use tubeflow::{AutomationStyle, Config, FlowGenerator, FlowGraph, GenerateParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let goal = std::env::args().nth(1).unwrap_or_else(|| "Grow subscribers with weekly shorts".to_string());

    let generator = FlowGenerator::from_config(&Config::from_env())?;
    let params = GenerateParams::new(goal, AutomationStyle::Growth).tone("friendly").include_llm(true);

    let generation = generator.generate_detailed(&params).await;
    if let Some(reason) = generation.reason() {
        println!("Loaded fallback flow: {}", reason);
    }

    let flow = generation.flow();
    println!("{}", FlowGraph::new(flow).schema());
    println!();
    println!("{}", flow.summary());
    println!();
    println!("{} => {}", flow.export_file_name(), flow.to_json_pretty()?);

    Ok(())
}
