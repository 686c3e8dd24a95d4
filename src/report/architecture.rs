use crate::network::topology::Topology;

const HEADER: &str = "=== Neural Network Architecture ===";
const LABEL_WIDTH: usize = 25;
const CELL_WIDTH: usize = 6;

/// Text diagram of the input → hidden → output layout.
pub fn render(topology: &Topology) -> String {
    let inputs: Vec<String> = (1..=topology.input_nodes).map(|i| format!("[X{i}]")).collect();
    let hidden: Vec<String> = (1..=topology.hidden_nodes).map(|i| format!("[H{i}]")).collect();
    let outputs: Vec<String> = if topology.output_nodes == 1 {
        vec!["[Y]".to_string()]
    } else {
        (1..=topology.output_nodes).map(|i| format!("[Y{i}]")).collect()
    };

    let mut lines = vec![HEADER.to_string()];
    lines.push(layer_line("Input Layer", &inputs));
    lines.extend(arrows(inputs.len()));
    lines.push(layer_line("Hidden Layer", &hidden));
    lines.extend(arrows(hidden.len()));
    lines.push(layer_line("Output Layer", &outputs));
    lines.push("=".repeat(HEADER.len()));
    lines.join("\n")
}

fn layer_line(name: &str, nodes: &[String]) -> String {
    let noun = if nodes.len() == 1 { "node" } else { "nodes" };
    let label = format!("{name} ({} {noun}):", nodes.len());
    let cells: String = nodes.iter().map(|n| format!("{n:^CELL_WIDTH$}")).collect();
    format!("{label:<LABEL_WIDTH$}{}", cells.trim_end())
}

fn arrows(count: usize) -> [String; 2] {
    let row = |glyph: &str| {
        let cells: String = (0..count).map(|_| format!("{glyph:^CELL_WIDTH$}")).collect();
        format!("{:LABEL_WIDTH$}{}", "", cells.trim_end())
    };
    [row("|"), row("v")]
}
