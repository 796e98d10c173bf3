//! Spline-Node: Ankerpunkt mit zwei Tangenten-Handles.

use glam::Vec3;

/// Seite eines Tangenten-Handles relativ zum Ankerpunkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSide {
    /// Handle zum vorherigen Segment (`previous_control_point`)
    Previous,
    /// Handle zum nächsten Segment (`next_control_point`)
    Next,
}

impl HandleSide {
    /// Gibt die gegenüberliegende Seite zurück.
    pub fn opposite(self) -> Self {
        match self {
            HandleSide::Previous => HandleSide::Next,
            HandleSide::Next => HandleSide::Previous,
        }
    }
}

/// Einzelner Kontroll-Node einer Bézier-Spline.
///
/// Identität ergibt sich ausschließlich aus der Position in der Node-Liste.
/// Für die Lage der Handles gilt keine Invariante: Handles dürfen auf dem
/// Anker liegen oder Tangenten der Länge 0 erzeugen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BezierNode {
    /// Ankerpunkt auf der Kurve
    pub main_point: Vec3,
    /// Eingehendes Handle (Segment davor)
    pub previous_control_point: Vec3,
    /// Ausgehendes Handle (Segment danach)
    pub next_control_point: Vec3,
}

impl BezierNode {
    /// Erstellt einen neuen Node aus Anker und beiden Handles.
    pub fn new(main_point: Vec3, previous_control_point: Vec3, next_control_point: Vec3) -> Self {
        Self {
            main_point,
            previous_control_point,
            next_control_point,
        }
    }

    /// Start-Node einer frisch angelegten Spline: Ursprung, Handles nach hinten/vorne.
    pub fn seed() -> Self {
        Self::new(Vec3::ZERO, Vec3::NEG_Z, Vec3::Z)
    }

    /// Liest das Handle der angegebenen Seite.
    pub fn control_point(&self, side: HandleSide) -> Vec3 {
        match side {
            HandleSide::Previous => self.previous_control_point,
            HandleSide::Next => self.next_control_point,
        }
    }

    fn control_point_mut(&mut self, side: HandleSide) -> &mut Vec3 {
        match side {
            HandleSide::Previous => &mut self.previous_control_point,
            HandleSide::Next => &mut self.next_control_point,
        }
    }

    /// Verschiebt Anker und beide Handles um denselben Offset.
    pub fn translate(&mut self, offset: Vec3) {
        self.main_point += offset;
        self.previous_control_point += offset;
        self.next_control_point += offset;
    }

    /// Setzt den Anker neu; die Handles wandern mit, Tangenten bleiben erhalten.
    pub fn set_main_point(&mut self, position: Vec3) {
        let offset = position - self.main_point;
        self.translate(offset);
    }

    /// Setzt ein Handle neu.
    ///
    /// Bei `smooth` wird das gegenüberliegende Handle exakt entgegengesetzt
    /// zum bewegten Handle ausgerichtet, behält aber seinen bisherigen Abstand
    /// zum Anker. Das ergibt C1-Stetigkeit, aber keine Längen-Symmetrie.
    /// Hat sich das Handle nicht bewegt, bleibt das Gegenstück unverändert.
    pub fn set_control_point(&mut self, side: HandleSide, position: Vec3, smooth: bool) {
        let old = self.control_point(side);
        *self.control_point_mut(side) = position;

        if smooth && old != position {
            let main = self.main_point;
            let opposite = self.control_point_mut(side.opposite());
            let magnitude = (*opposite - main).length();
            // normalize_or_zero: Handle auf dem Anker liefert keine Richtung
            *opposite = main + (main - position).normalize_or_zero() * magnitude;
        }
    }

    /// Ausgehende Tangenten-Richtung (normiert, Null bei degeneriertem Handle).
    pub fn outgoing_direction(&self) -> Vec3 {
        (self.next_control_point - self.main_point).normalize_or_zero()
    }
}
