//! Canned Command Table
//!
//! The practice terminal never executes anything. Recognized input maps
//! to pre-written output through an ordered registry of commands, each
//! with an explicit match rule, decoupled from how the transcript is
//! displayed.
//!
//! Matching is case-insensitive on the trimmed input. Exact commands
//! require the whole line to equal the command name (`help me` is not
//! `help`); prefix commands accept any argument tail after the verb.

/// How a table entry matches submitted input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// The whole trimmed, lowercased line must equal one of the names
    Exact,
    /// The first whitespace-delimited token must equal the name; the
    /// argument tail is passed to the handler
    Prefix,
}

/// Outcome of running one line of input through the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Execution {
    /// Canned output lines to append to the transcript
    Output(Vec<String>),
    /// Reset the transcript to the banner instead of appending
    Clear,
    /// Unrecognized input; carries the guidance line
    NotFound(String),
}

/// One registry entry: verb(s), match rule, handler
struct CannedCommand {
    names: &'static [&'static str],
    rule: MatchRule,
    summary: &'static str,
    handler: fn(args: &str) -> Execution,
}

/// Ordered command registry; first match wins
static COMMANDS: &[CannedCommand] = &[
    CannedCommand {
        names: &["help"],
        rule: MatchRule::Exact,
        summary: "list available commands",
        handler: help,
    },
    CannedCommand {
        names: &["clear"],
        rule: MatchRule::Exact,
        summary: "clear the terminal",
        handler: |_| Execution::Clear,
    },
    CannedCommand {
        names: &["whoami"],
        rule: MatchRule::Exact,
        summary: "print the current user",
        handler: |_| lines(&["student"]),
    },
    CannedCommand {
        names: &["date"],
        rule: MatchRule::Exact,
        summary: "print the lab clock",
        handler: |_| lines(&["Tue Aug  5 14:02:31 UTC 2025"]),
    },
    CannedCommand {
        names: &["ls"],
        rule: MatchRule::Exact,
        summary: "list the home directory",
        handler: |_| lines(&["Desktop    Documents    Downloads    notes.txt    recon.txt    tools"]),
    },
    CannedCommand {
        names: &["pwd"],
        rule: MatchRule::Exact,
        summary: "print the working directory",
        handler: |_| lines(&["/home/student"]),
    },
    CannedCommand {
        names: &["ip addr", "ifconfig"],
        rule: MatchRule::Exact,
        summary: "show network interfaces",
        handler: |_| {
            lines(&[
                "1: lo: <LOOPBACK,UP,LOWER_UP> mtu 65536 state UNKNOWN",
                "    inet 127.0.0.1/8 scope host lo",
                "2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 state UP",
                "    link/ether 02:42:ac:11:00:02 brd ff:ff:ff:ff:ff:ff",
                "    inet 10.0.13.37/24 brd 10.0.13.255 scope global eth0",
            ])
        },
    },
    CannedCommand {
        names: &["cat"],
        rule: MatchRule::Prefix,
        summary: "print a file from the lab machine",
        handler: cat,
    },
    CannedCommand {
        names: &["echo"],
        rule: MatchRule::Prefix,
        summary: "print text back",
        handler: |args| lines(&[args]),
    },
    CannedCommand {
        names: &["nmap"],
        rule: MatchRule::Prefix,
        summary: "run a port scan against the lab target",
        handler: |_| {
            lines(&[
                "Starting Nmap 7.94 ( https://nmap.org ) at 2025-08-05 14:02 UTC",
                "Nmap scan report for target.lab.local (10.0.13.50)",
                "Host is up (0.00042s latency).",
                "Not shown: 996 closed tcp ports (reset)",
                "PORT     STATE SERVICE",
                "22/tcp   open  ssh",
                "80/tcp   open  http",
                "139/tcp  open  netbios-ssn",
                "445/tcp  open  microsoft-ds",
                "",
                "Nmap done: 1 IP address (1 host up) scanned in 1.24 seconds",
            ])
        },
    },
    CannedCommand {
        names: &["ping"],
        rule: MatchRule::Prefix,
        summary: "ping the lab target",
        handler: |_| {
            lines(&[
                "PING target.lab.local (10.0.13.50) 56(84) bytes of data.",
                "64 bytes from 10.0.13.50: icmp_seq=1 ttl=64 time=0.41 ms",
                "64 bytes from 10.0.13.50: icmp_seq=2 ttl=64 time=0.38 ms",
                "64 bytes from 10.0.13.50: icmp_seq=3 ttl=64 time=0.40 ms",
                "",
                "--- target.lab.local ping statistics ---",
                "3 packets transmitted, 3 received, 0% packet loss, time 2031ms",
            ])
        },
    },
];

/// Virtual files readable with `cat`
static FILES: &[(&str, &[&str])] = &[
    (
        "notes.txt",
        &[
            "scan the /24 before poking individual hosts",
            "creds for the practice box are in the lesson, not here",
        ],
    ),
    (
        "recon.txt",
        &[
            "target.lab.local  10.0.13.50",
            "gateway           10.0.13.1",
            "dns               10.0.13.1",
        ],
    ),
    ("/etc/hostname", &["seclab-workstation"]),
];

fn lines(text: &[&str]) -> Execution {
    Execution::Output(text.iter().map(|s| s.to_string()).collect())
}

fn help(_args: &str) -> Execution {
    let mut out = vec!["Available commands:".to_string()];
    for cmd in COMMANDS {
        out.push(format!("  {:<12} {}", cmd.names[0], cmd.summary));
    }
    Execution::Output(out)
}

fn cat(args: &str) -> Execution {
    let name = args.trim();
    if name.is_empty() {
        return lines(&["usage: cat <file>"]);
    }
    for (file, content) in FILES {
        if name.eq_ignore_ascii_case(file) {
            return lines(content);
        }
    }
    Execution::Output(vec![format!("cat: {}: No such file or directory", name)])
}

/// Run one line of trimmed input through the registry
///
/// First match wins. Unmatched input produces a single guidance line
/// echoing what was typed.
pub fn execute(input: &str) -> Execution {
    let lowered = input.to_lowercase();
    let first_token = lowered.split_whitespace().next().unwrap_or("");

    for cmd in COMMANDS {
        let matched = match cmd.rule {
            MatchRule::Exact => cmd.names.iter().any(|name| lowered == *name),
            MatchRule::Prefix => cmd.names.iter().any(|name| first_token == *name),
        };
        if matched {
            let args = match cmd.rule {
                MatchRule::Exact => "",
                MatchRule::Prefix => input[first_token.len()..].trim_start(),
            };
            return (cmd.handler)(args);
        }
    }

    Execution::NotFound(format!(
        "{}: command not found (try 'help')",
        input
    ))
}
