//! Built-in Curriculum Catalog
//!
//! The hand-authored course data. Everything here is static content:
//! lesson markup, syntax reference blocks, suggested practice-terminal
//! commands, and supplementary video links. All exercises reference the
//! simulated lab environment only.

use super::{Course, Lesson, Module, SyntaxEntry, VideoLink};

fn syn(title: &str, body: &str) -> SyntaxEntry {
    SyntaxEntry {
        title: title.to_string(),
        body: body.to_string(),
    }
}

fn video(title: &str, url: &str) -> VideoLink {
    VideoLink {
        title: title.to_string(),
        url: url.to_string(),
    }
}

/// The complete built-in course
pub(crate) fn builtin_course() -> Course {
    Course {
        id: "practical-cybersecurity".to_string(),
        title: "Practical Cybersecurity Foundations".to_string(),
        tagline: "From first principles to hands-on defense".to_string(),
        modules: vec![
            fundamentals(),
            network_recon(),
            web_security(),
            hardening(),
            incident_response(),
        ],
    }
}

fn fundamentals() -> Module {
    Module {
        id: "intro-fundamentals".to_string(),
        title: "Security Fundamentals".to_string(),
        duration: "2 hours".to_string(),
        description: "Core concepts every defender and tester needs".to_string(),
        videos: vec![video(
            "The CIA triad in 10 minutes",
            "https://videos.seclearn.example/cia-triad",
        )],
        lessons: vec![
            Lesson {
                title: "What Security Actually Means".to_string(),
                duration: Some("20 min".to_string()),
                content: r#"
<h3>The CIA Triad</h3>
<p>Almost every security control you will ever deploy protects one of three
properties: <strong>confidentiality</strong>, <strong>integrity</strong>, or
<strong>availability</strong>. When you evaluate a system, ask which of the
three an attacker could damage and what it would cost.</p>
<ul>
<li><strong>Confidentiality</strong> - only authorized parties can read the data</li>
<li><strong>Integrity</strong> - the data is what it claims to be, unmodified</li>
<li><strong>Availability</strong> - the system answers when legitimate users ask</li>
</ul>
<h3>Thinking in Threat Models</h3>
<p>A threat model is just a structured answer to four questions: what are you
building, what can go wrong, what are you doing about it, and did it work?
Write the answers down. A one-page model you maintain beats a fifty-page
model nobody reads.</p>
<p>Throughout this course you will practice in a <em>simulated lab</em>. The
terminal tab on this page talks to a canned environment, so you can poke at
it freely without touching any real network.</p>
"#
                .to_string(),
                syntax: vec![
                    syn(
                        "CIA quick reference",
                        "confidentiality: encryption, access control\nintegrity: hashing, signatures, audit logs\navailability: redundancy, rate limiting, backups",
                    ),
                    syn(
                        "Further reading",
                        "OWASP overview: https://owasp.org/www-community/\nNIST glossary: https://csrc.nist.gov/glossary",
                    ),
                ],
                commands: vec!["help".to_string(), "whoami".to_string()],
            },
            Lesson {
                title: "Meet the Lab Terminal".to_string(),
                duration: Some("15 min".to_string()),
                content: r#"
<h3>Your Practice Environment</h3>
<p>Open the <strong>Terminal</strong> tab and type <code>help</code>. The lab
shell recognizes a small set of commands and answers with realistic output.
Nothing you type here executes anywhere; it is a safe sandbox for building
muscle memory.</p>
<h3>Orienting Yourself on a New Box</h3>
<p>The first three commands on any unfamiliar machine are the same:</p>
<pre>whoami
pwd
ls</pre>
<p>Who am I, where am I, what is here. Make it a reflex. Then check the
network identity of the machine with <code>ip addr</code>.</p>
<p>Use the up and down arrow keys to walk back through commands you have
already typed, exactly like a real shell.</p>
"#
                .to_string(),
                syntax: vec![syn(
                    "Orientation commands",
                    "whoami   print the current user\npwd      print the working directory\nls       list files\nip addr  show network interfaces",
                )],
                commands: vec![
                    "whoami".to_string(),
                    "pwd".to_string(),
                    "ls".to_string(),
                    "ip addr".to_string(),
                ],
            },
            Lesson {
                title: "Attackers, Defenders, and the Kill Chain".to_string(),
                duration: Some("25 min".to_string()),
                content: r#"
<h3>How Intrusions Unfold</h3>
<p>Most intrusions follow a recognizable arc: reconnaissance, initial access,
persistence, lateral movement, and finally action on objectives. Defenders
who know the arc can break it at the cheapest point, which is almost always
early.</p>
<ul>
<li><strong>Reconnaissance</strong> - the attacker maps your exposure</li>
<li><strong>Initial access</strong> - one phished credential or one unpatched service</li>
<li><strong>Persistence</strong> - a foothold that survives a reboot</li>
<li><strong>Lateral movement</strong> - from the beachhead to the crown jewels</li>
</ul>
<p>The modules that follow walk the same arc from the attacker's side in the
lab, then flip to the defender's view: what each step looks like in logs and
how to make it louder.</p>
"#
                .to_string(),
                syntax: vec![syn(
                    "Kill chain stages",
                    "recon -> access -> persistence -> lateral movement -> objectives\nBreak the chain early: exposure reduction beats detection beats response.",
                )],
                commands: vec!["cat notes.txt".to_string()],
            },
        ],
    }
}

fn network_recon() -> Module {
    Module {
        id: "network-recon".to_string(),
        title: "Network Reconnaissance".to_string(),
        duration: "3 hours".to_string(),
        description: "Mapping hosts and services the way attackers do".to_string(),
        videos: vec![video(
            "Reading nmap output line by line",
            "https://videos.seclearn.example/nmap-output",
        )],
        lessons: vec![
            Lesson {
                title: "Host Discovery".to_string(),
                duration: Some("30 min".to_string()),
                content: r#"
<h3>Finding What Is Alive</h3>
<p>Before scanning ports you need to know which addresses answer at all. The
classic first probe is ICMP echo, <code>ping</code>. Try it against the lab
target in the Terminal tab:</p>
<pre>ping target.lab.local</pre>
<p>Three replies with sub-millisecond latency tell you the host is up and on
the same segment. On real networks remember that a silent host is not
necessarily a dead host; firewalls drop ICMP all the time.</p>
<h3>Scope and Authorization</h3>
<p>Recon against systems you do not own or have written authorization to
test is illegal in most jurisdictions. The lab target
<code>target.lab.local</code> exists so you never need to point these tools
at anything real while learning.</p>
"#
                .to_string(),
                syntax: vec![syn(
                    "ping output fields",
                    "icmp_seq  sequence number of the probe\nttl       remaining hop budget of the reply\ntime      round-trip latency\nLoss percentage is in the trailing statistics block.",
                )],
                commands: vec!["ping target.lab.local".to_string()],
            },
            Lesson {
                title: "Port Scanning with nmap".to_string(),
                duration: Some("45 min".to_string()),
                content: r#"
<h3>From Host to Services</h3>
<p>A live host is only interesting through the services it exposes. Port
scanning asks every port a short question and sorts the answers into
<strong>open</strong>, <strong>closed</strong>, and <strong>filtered</strong>.
Run the lab scan now:</p>
<pre>nmap target.lab.local</pre>
<h3>Reading the Report</h3>
<p>The canned lab report shows four open ports. Each one is a door with its
own story:</p>
<ul>
<li><code>22/tcp ssh</code> - remote administration; strong if keys-only</li>
<li><code>80/tcp http</code> - a web application, the subject of the next module</li>
<li><code>139/tcp netbios-ssn</code> and <code>445/tcp microsoft-ds</code> - Windows
file sharing, historically the fastest way into a flat network</li>
</ul>
<p>On an authorized engagement your next step would be service versioning;
in the lab, note the open ports in your head, you will meet them again.</p>
"#
                .to_string(),
                syntax: vec![
                    syn(
                        "Port states",
                        "open      a service accepted the probe\nclosed    the host answered 'nothing here'\nfiltered  no answer at all, usually a firewall dropping packets",
                    ),
                    syn(
                        "Common flags (reference)",
                        "-sV  probe service versions\n-p-  scan all 65535 ports\n-oA  save results in all formats\nDocs: https://nmap.org/book/man.html",
                    ),
                ],
                commands: vec![
                    "nmap target.lab.local".to_string(),
                    "nmap -sV target.lab.local".to_string(),
                ],
            },
            Lesson {
                title: "Mapping Your Own Exposure".to_string(),
                duration: Some("30 min".to_string()),
                content: r#"
<h3>Flip the Perspective</h3>
<p>Everything an attacker can learn in recon, you can learn first. An
<em>exposure inventory</em> is recon pointed at yourself, run on a schedule,
with diffs reviewed by a human.</p>
<ul>
<li>Enumerate every public IP and DNS name your organization owns</li>
<li>Scan them from outside your own network, the way a stranger would</li>
<li>Alert on <strong>new</strong> open ports, not on the steady state</li>
</ul>
<p>The lab files hint at this workflow: <code>cat recon.txt</code> shows the
kind of asset notes a tester keeps. Keep yours current and the next surprise
port will be yours to find, not theirs.</p>
"#
                .to_string(),
                syntax: vec![syn(
                    "Inventory habit",
                    "1. enumerate assets\n2. scan from outside\n3. diff against last run\n4. investigate every new listener",
                )],
                commands: vec!["cat recon.txt".to_string(), "ip addr".to_string()],
            },
        ],
    }
}

fn web_security() -> Module {
    Module {
        id: "web-attacks".to_string(),
        title: "Web Application Security".to_string(),
        duration: "4 hours".to_string(),
        description: "The injection family and how input becomes code".to_string(),
        videos: vec![video(
            "SQL injection, demonstrated safely",
            "https://videos.seclearn.example/sqli-demo",
        )],
        lessons: vec![
            Lesson {
                title: "How Input Becomes Code".to_string(),
                duration: Some("35 min".to_string()),
                content: r#"
<h3>The Root of the Injection Family</h3>
<p>SQL injection, command injection, and cross-site scripting are one bug
wearing three costumes: <strong>data crossing into an interpreter without a
boundary</strong>. The fix is always the same shape, keep data and code
separate using the interpreter's own mechanism.</p>
<pre>-- vulnerable: string concatenation
SELECT * FROM users WHERE name = '" + input + "';

-- safe: parameterized query
SELECT * FROM users WHERE name = ?;</pre>
<p>The parameterized form never re-parses the input as SQL, so a value of
<code>' OR '1'='1</code> stays a harmless string.</p>
<h3>Where to Look</h3>
<ul>
<li>Every query built with string concatenation</li>
<li>Every shell command assembled from user input</li>
<li>Every template that echoes input without encoding</li>
</ul>
"#
                .to_string(),
                syntax: vec![
                    syn(
                        "Injection defenses",
                        "SQL: parameterized queries / prepared statements\nShell: argument arrays, never string concat\nHTML: contextual output encoding\nAll three: allow-list validation at the edge",
                    ),
                    syn(
                        "Reference",
                        "OWASP injection prevention: https://cheatsheetseries.owasp.org/cheatsheets/Injection_Prevention_Cheat_Sheet.html",
                    ),
                ],
                commands: vec!["echo data is not code".to_string()],
            },
            Lesson {
                title: "Sessions and Authentication".to_string(),
                duration: Some("40 min".to_string()),
                content: r#"
<h3>Proving Who You Are, Repeatedly</h3>
<p>HTTP forgets you between requests. Sessions paper over that with a token
the browser replays, which makes the token exactly as valuable as the
password that created it.</p>
<ul>
<li>Generate session ids from a cryptographic RNG, never from time or counters</li>
<li>Set <code>HttpOnly</code>, <code>Secure</code>, and <code>SameSite</code> on the cookie</li>
<li>Rotate the id on login and destroy it on logout, server side</li>
</ul>
<h3>Passwords at Rest</h3>
<p>Store only slow, salted hashes: <code>argon2id</code> or
<code>bcrypt</code>. A fast hash like plain SHA-256 can be brute-forced at
billions of guesses per second on commodity GPUs; that is a property for
integrity checks, not for secrets.</p>
"#
                .to_string(),
                syntax: vec![syn(
                    "Cookie flags",
                    "HttpOnly  not readable from JavaScript\nSecure    only sent over TLS\nSameSite  limits cross-site sending (CSRF defense)",
                )],
                commands: vec![],
            },
            Lesson {
                title: "The Browser as a Battleground".to_string(),
                duration: Some("35 min".to_string()),
                content: r#"
<h3>Cross-Site Scripting</h3>
<p>XSS is injection where the interpreter is the victim's browser. An
attacker's script running in your origin can read everything the page can,
including session state. Encode on output for the exact context, HTML body,
attribute, URL, or JavaScript string, they all have different rules.</p>
<h3>Defense in Depth</h3>
<ul>
<li><strong>Content-Security-Policy</strong> - refuse inline script entirely</li>
<li><strong>HttpOnly cookies</strong> - keep tokens out of script reach</li>
<li><strong>Framework auto-escaping</strong> - use it, do not hand-build HTML</li>
</ul>
<p>A CSP that blocks inline script turns most reflected XSS findings from
"account takeover" into "console error". Cheap win; deploy it in
report-only mode first and watch what it would break.</p>
"#
                .to_string(),
                syntax: vec![syn(
                    "Starter CSP",
                    "Content-Security-Policy: default-src 'self'; script-src 'self'; object-src 'none'\nRoll out with Content-Security-Policy-Report-Only first.",
                )],
                commands: vec![],
            },
        ],
    }
}

fn hardening() -> Module {
    Module {
        id: "system-hardening".to_string(),
        title: "System Hardening".to_string(),
        duration: "3 hours".to_string(),
        description: "Shrinking the attack surface before anyone knocks".to_string(),
        videos: vec![],
        lessons: vec![
            Lesson {
                title: "Least Privilege in Practice".to_string(),
                duration: Some("30 min".to_string()),
                content: r#"
<h3>Every Permission Is a Liability</h3>
<p>Least privilege is simple to state and endless to apply: every account,
process, and token gets the minimum it needs, nothing more. The payoff shows
up on your worst day, a compromised service account that can only reach its
own database is an incident; one with domain admin is a disaster.</p>
<ul>
<li>Separate admin accounts from daily-driver accounts</li>
<li>Run services as dedicated low-privilege users</li>
<li>Expire access that has not been used in 90 days</li>
</ul>
<p>In the lab, check <code>whoami</code>, you are a plain user on the
practice box, which is exactly how you should operate by default.</p>
"#
                .to_string(),
                syntax: vec![syn(
                    "Privilege audit questions",
                    "Who can log in to this host?\nWhich of them can become root?\nWhat breaks if we remove this permission?\nIf the answer is 'nothing', remove it today.",
                )],
                commands: vec!["whoami".to_string()],
            },
            Lesson {
                title: "Patching and Attack Surface".to_string(),
                duration: Some("30 min".to_string()),
                content: r#"
<h3>The Unglamorous 80%</h3>
<p>Most real intrusions do not use novel exploits; they use last year's CVE
against a service nobody remembered running. Two habits close that gap:</p>
<ul>
<li><strong>Know your listeners.</strong> Every open port from your own scans
must map to a service with an owner and a reason</li>
<li><strong>Patch on a clock.</strong> Critical within days, not quarters, and
measure the lag honestly</li>
</ul>
<p>Disable what you cannot justify. The netbios ports you saw on the lab
scan are a classic example, if the host does not need to serve Windows
shares, those listeners are pure downside.</p>
"#
                .to_string(),
                syntax: vec![syn(
                    "Surface reduction order",
                    "1. remove the service\n2. else bind it to localhost\n3. else firewall it to known peers\n4. else patch it fast and log it loudly",
                )],
                commands: vec!["nmap target.lab.local".to_string()],
            },
            Lesson {
                title: "Logging That Earns Its Disk".to_string(),
                duration: Some("30 min".to_string()),
                content: r#"
<h3>Logs Are for Questions</h3>
<p>Collect the events that answer an investigator's questions: who logged in,
from where, what ran, what touched the crown jewels. Authentication events,
process creation, and outbound connections cover a remarkable share of real
incidents.</p>
<ul>
<li>Ship logs off the host the moment they are written, attackers edit local logs</li>
<li>Timestamp in UTC everywhere, clock skew ruins timelines</li>
<li>Alert on absences too, a host that goes quiet may be a host that was silenced</li>
</ul>
<p>Test the pipeline the way you test backups: pick a question, "who logged
into the practice box yesterday?", and time how long the answer takes.</p>
"#
                .to_string(),
                syntax: vec![syn(
                    "High-value events",
                    "auth: logins, failures, privilege changes\nexec: process creation with command line\nnet: outbound connections from servers\nfile: reads of your most sensitive paths",
                )],
                commands: vec!["date".to_string(), "cat /etc/hostname".to_string()],
            },
        ],
    }
}

fn incident_response() -> Module {
    Module {
        id: "incident-response".to_string(),
        title: "Incident Response".to_string(),
        duration: "2.5 hours".to_string(),
        description: "What to do when prevention was not enough".to_string(),
        videos: vec![video(
            "A post-incident review, start to finish",
            "https://videos.seclearn.example/postmortem-walkthrough",
        )],
        lessons: vec![
            Lesson {
                title: "First Hour of an Incident".to_string(),
                duration: Some("35 min".to_string()),
                content: r#"
<h3>Slow Is Smooth</h3>
<p>The worst incident decisions are made in the first ten minutes by people
improvising. A response plan exists so nobody improvises: it names an
incident commander, a communication channel, and the first three moves.</p>
<ul>
<li><strong>Triage</strong> - what is affected and is it spreading?</li>
<li><strong>Contain</strong> - isolate the host; do not power it off, memory is evidence</li>
<li><strong>Preserve</strong> - capture volatile data before changing anything</li>
</ul>
<p>Write timestamps on everything you do. Your future self, assembling the
timeline at 2 a.m., will be grateful.</p>
"#
                .to_string(),
                syntax: vec![syn(
                    "Containment options",
                    "network isolation: pull the VLAN, keep the power\naccount lockout: disable, don't delete\nsnapshot first when the platform allows it",
                )],
                commands: vec!["date".to_string()],
            },
            Lesson {
                title: "Learning From the Fire".to_string(),
                duration: Some("30 min".to_string()),
                content: r#"
<h3>The Blameless Post-Incident Review</h3>
<p>After recovery, the incident still owes you something: the review. Run it
blameless, the question is never "who typed the command" but "what made
typing it so easy and catching it so hard".</p>
<ul>
<li>Build the timeline from logs, not from memory</li>
<li>Separate root cause from contributing factors, there are always several</li>
<li>Leave with three concrete actions, each with an owner and a date</li>
</ul>
<p>Close the loop in this course too: go back to the modules this incident
touched. The recon module told you to diff your exposure; the hardening
module told you to own your listeners. Reviews are where those habits get
their budget.</p>
"#
                .to_string(),
                syntax: vec![syn(
                    "Review agenda",
                    "1. timeline walk-through (facts only)\n2. what went well / what hurt\n3. root cause and contributing factors\n4. actions with owners and dates",
                )],
                commands: vec!["help".to_string()],
            },
        ],
    }
}
