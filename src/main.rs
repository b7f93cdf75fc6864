use colored::Colorize;
use std::error::Error;
use zerotier_subnet_utils::{ifname, node_addressing, NetworkId, NodeId};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let mut args = std::env::args().skip(1);
    let nwid_arg = args.next().ok_or("Usage: zerotier-subnet-utils <network-id> <node-id>")?;
    let nid_arg = args.next().ok_or("Usage: zerotier-subnet-utils <network-id> <node-id>")?;

    let nwid: NetworkId = nwid_arg.parse()?;
    let nid: NodeId = nid_arg.parse()?;

    let derived = node_addressing(nwid, nid);

    println!("network {} node {}", nwid.to_string().blue(), nid.to_string().blue());
    println!("  6plane network: {}", derived.sixplane_net.to_string().green());
    println!("  6plane node:    {}", derived.sixplane_node.to_string().green());
    println!("  rfc4193:        {}", derived.rfc4193_net.to_string().green());
    println!("  ifname:         {}", derived.ifname.yellow());
    println!("  ifname trial 1: {}", ifname(nwid, 1).yellow());

    Ok(())
}
