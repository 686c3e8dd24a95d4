use xornet::{evaluate, train_loop, Dataset, LossRecord, NetworkParameters, RandomInitializer, Topology, TrainConfig};

fn main() {
    let topology = Topology::XOR;
    let mut params = NetworkParameters::initialized(&topology, &mut RandomInitializer::from_entropy());
    let dataset = Dataset::xor();
    let config = TrainConfig::default();

    let mut records: Vec<LossRecord> = Vec::new();
    let history = train_loop(&mut params, &dataset, &config, &mut records);

    for record in &records {
        println!("Epoch {}: loss = {:.6}", record.epoch, record.average_loss);
    }
    println!("Final loss: {:.6}", history.final_loss);

    for p in evaluate(&params, &dataset) {
        println!("Input: {:?} -> Output: {:.4} (target {})", p.input, p.output, p.target);
    }
}
