#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    Alive,
    #[default]
    Dead,
}

impl Status {
    pub fn flipped(self) -> Self {
        match self {
            Status::Alive => Status::Dead,
            Status::Dead => Status::Alive,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub status: Status,
}

impl Cell {
    pub fn alive() -> Self {
        Self {
            status: Status::Alive,
        }
    }

    pub fn dead() -> Self {
        Self {
            status: Status::Dead,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.status == Status::Alive
    }

    pub fn toggle(&mut self) {
        self.status = self.status.flipped();
    }
}

impl From<Status> for Cell {
    fn from(status: Status) -> Self {
        Self { status }
    }
}
