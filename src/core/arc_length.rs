//! Bogenlängen-Abtastung: numerisches Aufsummieren kleiner Punkt-zu-Punkt-Abstände.
//!
//! Keine geschlossene Längenformel; alle Schleifen sind über `max_steps`
//! begrenzt, damit auch degenerierte Schrittweiten (0, negativ) terminieren.

use super::error::SplineError;
use super::spline::{BezierSpline, Curve};
use std::iter::FusedIterator;

/// Standard-Obergrenze für Abtastschritte.
pub const DEFAULT_MAX_SCAN_STEPS: usize = 100_000;

/// Wie eine Abtastung beendet wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Ziel-Distanz erreicht (bzw. Kurvenende bei Längenmessung)
    Reached,
    /// `t >= 1` überschritten, bevor die Ziel-Distanz erreicht war
    EndOfCurve,
    /// Schritt-Limit erreicht, Ergebnis ist nur eine Näherung
    Exhausted,
}

/// Ergebnis einer Abtastung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanResult {
    /// Erreichter Parameter (ggf. über das Ziel hinaus)
    pub t: f32,
    /// Aufsummierte Distanz
    pub distance: f32,
    /// Anzahl ausgewerteter Schritte
    pub steps: usize,
    pub outcome: ScanOutcome,
}

impl ScanResult {
    /// `true` wenn das Schritt-Limit gegriffen hat.
    pub fn is_exhausted(&self) -> bool {
        self.outcome == ScanOutcome::Exhausted
    }

    /// Wandelt ein abgebrochenes Ergebnis in [`SplineError::ScanExhausted`] um.
    pub fn into_converged(self) -> Result<Self, SplineError> {
        if self.is_exhausted() {
            return Err(SplineError::ScanExhausted {
                t: self.t,
                steps: self.steps,
            });
        }
        Ok(self)
    }
}

impl<'a> Curve<'a> {
    /// Läuft ab `start_t` in Schritten von `scan_step`, bis die zurückgelegte
    /// Distanz `target_distance` erreicht.
    ///
    /// Das zurückgegebene `t` ist der erste Abtastpunkt mit ausreichender
    /// Distanz; es wird nicht auf die exakte Ziel-Distanz zurückinterpoliert.
    /// Der Fehler ist durch `scan_step` mal lokaler Kurvengeschwindigkeit begrenzt.
    pub fn distance_between(
        &self,
        start_t: f32,
        target_distance: f32,
        scan_step: f32,
        max_steps: usize,
    ) -> ScanResult {
        let mut t = start_t;
        let mut current = self.evaluate(t);
        let mut travelled = 0.0f32;
        let mut steps = 0usize;

        let outcome = loop {
            if travelled >= target_distance {
                break ScanOutcome::Reached;
            }
            // Vorwärts jenseits von t = 1 wächst die Distanz nicht mehr
            if t >= 1.0 && scan_step >= 0.0 {
                break ScanOutcome::EndOfCurve;
            }
            if steps >= max_steps {
                break ScanOutcome::Exhausted;
            }
            steps += 1;
            t = start_t + steps as f32 * scan_step;
            let next = self.evaluate(t);
            travelled += current.distance(next);
            current = next;
        };

        if outcome == ScanOutcome::Exhausted {
            log::debug!(
                "Abtastung ab t={} nach {} Schritten abgebrochen ({} von {})",
                start_t,
                steps,
                travelled,
                target_distance
            );
        }

        ScanResult {
            t,
            distance: travelled,
            steps,
            outcome,
        }
    }

    /// Parameterwerte im Abstand von etwa `target_distance` entlang der Kurve.
    ///
    /// Beginnt bei 0 und endet immer mit exakt 1.
    pub fn sample_by_distance(
        &self,
        target_distance: f32,
        scan_step: f32,
        max_steps: usize,
    ) -> DistanceSamples<'a> {
        DistanceSamples {
            curve: *self,
            target_distance,
            scan_step,
            max_steps,
            current: 0.0,
            steps: 0,
            phase: SamplePhase::Scanning,
        }
    }

    /// Gesamtlänge in festen Schritten von `scan_step` plus Restsegment bis `t = 1`.
    ///
    /// Genauigkeit `O(scan_step)`, Aufwand `O(1 / scan_step)` Auswertungen.
    /// Nicht-positive Schrittweiten liefern die Sehne zwischen Start und Ende.
    pub fn total_length(&self, scan_step: f32, max_steps: usize) -> ScanResult {
        let end = self.evaluate(1.0);
        let mut previous = self.evaluate(0.0);

        if scan_step.is_nan() || scan_step <= 0.0 {
            return ScanResult {
                t: 1.0,
                distance: previous.distance(end),
                steps: 0,
                outcome: ScanOutcome::Reached,
            };
        }

        let mut length = 0.0f32;
        let mut steps = 0usize;
        while ((steps + 1) as f32) * scan_step < 1.0 && steps < max_steps {
            steps += 1;
            let p = self.evaluate(steps as f32 * scan_step);
            length += previous.distance(p);
            previous = p;
        }

        let outcome = if ((steps + 1) as f32) * scan_step < 1.0 {
            log::warn!(
                "Längenmessung nach {} Schritten abgebrochen, Rest als Sehne genähert",
                steps
            );
            ScanOutcome::Exhausted
        } else {
            ScanOutcome::Reached
        };
        length += previous.distance(end);

        ScanResult {
            t: 1.0,
            distance: length,
            steps,
            outcome,
        }
    }
}

impl BezierSpline {
    /// Siehe [`Curve::distance_between`].
    pub fn distance_between(
        &self,
        start_t: f32,
        target_distance: f32,
        scan_step: f32,
        max_steps: usize,
    ) -> Result<ScanResult, SplineError> {
        Ok(self
            .curve()?
            .distance_between(start_t, target_distance, scan_step, max_steps))
    }

    /// Siehe [`Curve::sample_by_distance`].
    pub fn sample_by_distance(
        &self,
        target_distance: f32,
        scan_step: f32,
        max_steps: usize,
    ) -> Result<DistanceSamples<'_>, SplineError> {
        Ok(self
            .curve()?
            .sample_by_distance(target_distance, scan_step, max_steps))
    }

    /// Siehe [`Curve::total_length`].
    pub fn total_length(
        &self,
        scan_step: f32,
        max_steps: usize,
    ) -> Result<ScanResult, SplineError> {
        Ok(self.curve()?.total_length(scan_step, max_steps))
    }

    /// Kurvenlänge mit Standard-Schrittlimit.
    pub fn length(&self, scan_step: f32) -> Result<f32, SplineError> {
        Ok(self.total_length(scan_step, DEFAULT_MAX_SCAN_STEPS)?.distance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SamplePhase {
    Scanning,
    Tail,
    Done,
}

/// Lazy, endliche Folge von Parameterwerten aus [`Curve::sample_by_distance`].
///
/// `Clone` liefert eine unabhängige Kopie ab dem aktuellen Stand,
/// [`DistanceSamples::restart`] beginnt wieder bei `t = 0`.
#[derive(Debug, Clone)]
pub struct DistanceSamples<'a> {
    curve: Curve<'a>,
    target_distance: f32,
    scan_step: f32,
    max_steps: usize,
    current: f32,
    steps: usize,
    phase: SamplePhase,
}

impl DistanceSamples<'_> {
    /// Setzt die Folge auf den Anfang zurück.
    pub fn restart(&mut self) {
        self.current = 0.0;
        self.steps = 0;
        self.phase = SamplePhase::Scanning;
    }
}

impl Iterator for DistanceSamples<'_> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        match self.phase {
            SamplePhase::Scanning => {
                if self.current < 1.0 && self.steps < self.max_steps {
                    self.steps += 1;
                    let t = self.current;
                    let result = self.curve.distance_between(
                        t,
                        self.target_distance,
                        self.scan_step,
                        self.max_steps,
                    );
                    if result.t > t {
                        self.current = result.t;
                    } else {
                        // Kein Vorwärtskommen (Ziel <= 0 oder Schritt <= 0)
                        self.phase = SamplePhase::Tail;
                    }
                    Some(t)
                } else {
                    self.phase = SamplePhase::Done;
                    Some(1.0)
                }
            }
            SamplePhase::Tail => {
                self.phase = SamplePhase::Done;
                Some(1.0)
            }
            SamplePhase::Done => None,
        }
    }
}

impl FusedIterator for DistanceSamples<'_> {}
