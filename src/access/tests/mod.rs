//! Unit tests for actors, capabilities, and the authorization gate.
