//! Pretty printers for response arrays. Each command family picks a
//! [`Render`]; `--json` bypasses all of them and prints the raw
//! `arguments` payload of the first element.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
  Generic,
  Version,
  Status,
  Config,
  SubnetList,
  LeaseList,
  Statistics,
  SimpleStatus,
}

pub fn render(render: Render, elements: &[Value], raw_json: bool) {
  if raw_json {
    print_raw_arguments(elements);
    return;
  }
  match render {
    Render::Generic => print_generic(elements),
    Render::Version => print_version(elements),
    Render::Status => print_status(elements),
    Render::Config => print_config(elements),
    Render::SubnetList => print_subnet_list(elements),
    Render::LeaseList => print_lease_list(elements),
    Render::Statistics => print_statistics(elements),
    Render::SimpleStatus => print_simple_status(elements),
  }
}

fn get_str<'a>(obj: &'a Value, key: &str) -> &'a str {
  obj.get(key).and_then(Value::as_str).unwrap_or("N/A")
}

fn get_int(obj: &Value, key: &str) -> i64 {
  obj.get(key).and_then(Value::as_i64).unwrap_or(0)
}

fn arguments(elements: &[Value]) -> Option<&Value> {
  elements.first().and_then(|e| e.get("arguments"))
}

fn print_raw_arguments(elements: &[Value]) {
  if let Some(arguments) = arguments(elements) {
    println!("{arguments}");
  }
}

fn print_generic(elements: &[Value]) {
  if let Ok(pretty) = serde_json::to_string_pretty(&Value::Array(elements.to_vec())) {
    println!("{pretty}");
  }
}

fn print_version(elements: &[Value]) {
  println!("{}", "=".repeat(80));
  println!(" {:<16} | {:<16} | Extended Version", "Service", "Version");
  println!("{}", "-".repeat(80));
  match arguments(elements) {
    // Multi-service call: one entry per service
    Some(Value::Array(entries)) => {
      for entry in entries {
        let service = get_str(entry, "service");
        let (version, extended) = if get_int(entry, "result") == 0 {
          let nested = entry.get("arguments").cloned().unwrap_or(Value::Null);
          (
            get_str(&nested, "version").to_string(),
            get_str(&nested, "extended").to_string(),
          )
        } else {
          ("ERROR".to_string(), get_str(entry, "text").to_string())
        };
        println!(" {service:<16} | {version:<16} | {extended}");
      }
    }
    // The agent answering for itself
    Some(args @ Value::Object(_)) => {
      println!(
        " {:<16} | {:<16} | {}",
        "ctrl-agent",
        get_str(args, "version"),
        get_str(args, "extended")
      );
    }
    _ => {}
  }
  println!("{}", "=".repeat(80));
}

fn print_status(elements: &[Value]) {
  let Some(args) = arguments(elements).filter(|a| a.is_object()) else {
    return;
  };
  println!("{}", "-".repeat(40));
  println!("           Service Status");
  println!("{}", "-".repeat(40));
  println!("  PID: {}", get_int(args, "pid"));
  println!("  Uptime (seconds): {}", get_int(args, "uptime"));
  println!("{}", "-".repeat(40));
}

fn print_config(elements: &[Value]) {
  // config-get nests the document under the capitalized service key
  let nested = arguments(elements)
    .and_then(Value::as_object)
    .and_then(|map| map.values().next());
  match nested {
    Some(document) => {
      if let Ok(pretty) = serde_json::to_string_pretty(document) {
        println!("{pretty}");
      }
    }
    None => print_generic(elements),
  }
}

fn print_subnet_list(elements: &[Value]) {
  let Some(subnets) = arguments(elements)
    .and_then(|a| a.get("subnets"))
    .and_then(Value::as_array)
  else {
    return;
  };
  println!("{}", "=".repeat(74));
  println!(" {:<8} | {:<45} | Pools", "ID", "Subnet");
  println!("{}", "-".repeat(74));
  for subnet in subnets {
    let first_pool = subnet
      .get("pools")
      .and_then(Value::as_array)
      .and_then(|pools| pools.first())
      .map(|pool| get_str(pool, "pool"))
      .unwrap_or("N/A");
    println!(
      " {:<8} | {:<45} | {}",
      get_int(subnet, "id"),
      get_str(subnet, "subnet"),
      first_pool
    );
  }
  println!("{}", "=".repeat(74));
}

fn print_lease_list(elements: &[Value]) {
  let Some(leases) = arguments(elements)
    .and_then(|a| a.get("leases"))
    .and_then(Value::as_array)
  else {
    return;
  };
  println!("{}", "=".repeat(96));
  println!(
    " {:<16} | {:<18} | {:<38} | {:<8} | Hostname",
    "IP Address", "HW Address", "Client ID", "SubnetID"
  );
  println!("{}", "-".repeat(96));
  for lease in leases {
    println!(
      " {:<16} | {:<18} | {:<38} | {:<8} | {}",
      get_str(lease, "ip-address"),
      get_str(lease, "hw-address"),
      get_str(lease, "client-id"),
      get_int(lease, "subnet-id"),
      get_str(lease, "hostname")
    );
  }
  println!("{}", "=".repeat(96));
}

fn print_statistics(elements: &[Value]) {
  let Some(stats) = arguments(elements).and_then(Value::as_object) else {
    if let Some(first) = elements.first() {
      println!("{}", get_str(first, "text"));
    }
    return;
  };
  println!("{}", "=".repeat(80));
  println!(" {:<35} | {:<15} | Timestamp", "Statistic Name", "Value");
  println!("{}", "-".repeat(80));
  for (name, samples) in stats {
    // Each statistic is a list of [value, timestamp] samples, newest first
    let Some(sample) = samples
      .as_array()
      .and_then(|s| s.first())
      .and_then(Value::as_array)
    else {
      continue;
    };
    if let (Some(count), Some(timestamp)) =
      (sample.first().and_then(Value::as_i64), sample.get(1).and_then(Value::as_str))
    {
      println!(" {name:<35} | {count:<15} | {timestamp}");
    }
  }
  println!("{}", "=".repeat(80));
}

fn print_simple_status(elements: &[Value]) {
  if let Some(first) = elements.first() {
    println!("{}", get_str(first, "text"));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn arguments_come_from_the_first_element() {
    let elements = vec![
      json!({"result": 0, "arguments": {"a": 1}}),
      json!({"result": 0, "arguments": {"b": 2}}),
    ];
    assert_eq!(arguments(&elements), Some(&json!({"a": 1})));
  }

  #[test]
  fn helpers_fall_back_on_missing_fields() {
    let obj = json!({"pid": 42});
    assert_eq!(get_int(&obj, "pid"), 42);
    assert_eq!(get_int(&obj, "uptime"), 0);
    assert_eq!(get_str(&obj, "hostname"), "N/A");
  }
}
