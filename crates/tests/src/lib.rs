#[cfg(test)]
mod common;

#[cfg(test)]
mod sign_in_tests;

#[cfg(test)]
mod register_tests;

#[cfg(test)]
mod access_tests;

#[cfg(test)]
mod persistence_tests;

#[cfg(test)]
mod latency_tests;

#[cfg(test)]
mod fixture_tests;

#[cfg(test)]
mod attempt_tests;
