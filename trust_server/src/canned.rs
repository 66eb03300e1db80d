use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

use crate::config::DemoConfig;

/// Stock reviews served by the demo endpoint.
pub const CANNED_ANALYSES: [&str; 20] = [
    "This repository has a strong track record of active maintenance, with frequent commits and quick issue resolution. The presence of recent pull requests and responses from maintainers suggests high reliability. However, some open issues have been neglected for months, which may indicate gaps in responsiveness.",
    "The repository has a steady commit history, with contributions from multiple developers. The consistency of updates implies ongoing support, but the absence of significant changes in the last six months raises concerns about future maintenance.",
    "The presence of a comprehensive test suite, including unit and integration tests, increases the reliability of this repository. However, the test coverage percentage is low, meaning potential hidden bugs may still exist.",
    "With over 100 contributors and an active discussions page, this repository demonstrates strong community engagement. The presence of external contributors adds to its reliability, but conflicting pull requests suggest a need for better project management.",
    "The repository follows best security practices by implementing automated vulnerability scans and timely dependency updates. However, a history of security vulnerabilities without quick patches lowers its overall reliability.",
    "Well-structured documentation, including installation guides, API references, and troubleshooting sections, suggests that the project is reliable. However, outdated examples in the README introduce potential confusion.",
    "The repository uses a permissive MIT license, allowing broad use without legal concerns. The presence of clear licensing ensures validity, but the lack of a CONTRIBUTING.md file may deter external contributions.",
    "A well-structured codebase with consistent formatting, meaningful comments, and modular design enhances reliability. However, a lack of adherence to modern coding standards in some parts raises minor concerns.",
    "The repository frequently updates dependencies and includes a package lock file, ensuring compatibility. However, reliance on many third-party dependencies increases the risk of breakages if upstream projects become unmaintained.",
    "The repository has an open issue tracker with clear labels and responses from maintainers, increasing reliability. However, some critical bugs remain unresolved for extended periods, affecting its stability.",
    "Automated testing, continuous integration, and deployment pipelines enhance the project's stability. However, occasional CI/CD failures without explanations in issue discussions reduce trust in its reliability.",
    "A high star count suggests community trust, and a large number of forks indicates usability. However, a low contributor-to-star ratio might mean the project is used more than it is improved upon.",
    "Several open pull requests have gone unanswered for months, suggesting possible abandonment. While the project remains functional, its long-term viability is questionable.",
    "A well-defined semantic versioning system ensures stability and backward compatibility. However, frequent major version updates indicate breaking changes that may require extra effort for adopters.",
    "A live demo allows users to validate the repository’s functionality. However, an outdated demo version raises concerns about whether the latest code is stable.",
    "The repository has been forked multiple times, with some forks gaining traction. This suggests that even if the original maintainers stop working on it, alternative maintainers may keep it alive.",
    "Frequent bug reports with quick patches indicate an actively maintained project. However, some issues lack response or remain open despite user-provided fixes.",
    "The changelog clearly documents breaking changes and upgrade paths, making the repository more reliable for long-term use. However, some changes lack migration guides, making transitions difficult.",
    "Strict code review policies and enforced coding standards increase reliability. However, slow review times may discourage contributors, affecting long-term sustainability.",
    "The repository has been archived, indicating that it is no longer maintained. While it may still work as-is, its reliability is significantly reduced due to the lack of future updates and security patches.",
];

pub fn random_analysis() -> &'static str {
    CANNED_ANALYSES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(CANNED_ANALYSES[0])
}

/// 在 [min, max] 毫秒内均匀取一个延迟
pub fn random_delay(demo: &DemoConfig) -> Duration {
    let millis = if demo.min_delay_ms >= demo.max_delay_ms {
        demo.min_delay_ms
    } else {
        rand::thread_rng().gen_range(demo.min_delay_ms..=demo.max_delay_ms)
    };
    Duration::from_millis(millis)
}
