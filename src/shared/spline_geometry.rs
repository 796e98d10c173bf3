//! Reine Geometrie-Funktionen für Bézier-Kurven (de Casteljau).
//!
//! Layer-neutral: wird von `core` für die Segment-Auswertung und von `app`
//! für Vorschau-Polylinien genutzt, ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec3;

/// Reduziert eine Kontrollpunkt-Gruppe in-place per linearer Interpolation.
///
/// Jede Runde ersetzt `buf[i]` durch `lerp(buf[i], buf[i + 1], t)` und
/// verkürzt die aktive Gruppe um eins. Das entspricht der rekursiven
/// Definition (Interpolation zwischen linker und rechter Teilgruppe),
/// kommt aber ohne Rekursion und damit ohne Stack-Tiefe pro Grad aus.
fn reduce_in_place(buf: &mut [Vec3], t: f32) -> Option<Vec3> {
    let mut len = buf.len();
    if len == 0 {
        return None;
    }
    while len > 1 {
        for i in 0..len - 1 {
            buf[i] = buf[i].lerp(buf[i + 1], t);
        }
        len -= 1;
    }
    Some(buf[0])
}

/// Wertet eine Bézier-Kurve beliebigen Grades an `t` aus.
///
/// - 0 Punkte: `None`
/// - 1 Punkt: der Punkt selbst
/// - 2 Punkte: lineare Interpolation
/// - n Punkte: Interpolation der Auswertungen von `points[..n-1]` und `points[1..]`
pub fn de_casteljau(points: &[Vec3], t: f32) -> Option<Vec3> {
    let mut scratch = points.to_vec();
    reduce_in_place(&mut scratch, t)
}

/// Kubischer Spezialfall von [`de_casteljau`] ohne Heap-Allokation.
pub fn cubic_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    // Endpunkte exakt treffen (lerp ist bei t = 1 nicht bitgenau)
    if t == 0.0 {
        return p0;
    }
    if t == 1.0 {
        return p3;
    }
    let mut buf = [p0, p1, p2, p3];
    reduce_in_place(&mut buf, t).unwrap_or(p0)
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
